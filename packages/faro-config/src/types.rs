use serde::Deserialize;

pub const DEFAULT_RELEVANCE_THRESHOLD: u8 = 40;
pub const DEFAULT_FUZZY_SIMILARITY_THRESHOLD: f32 = 0.85;

#[derive(Debug, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub scoring: Scoring,
	#[serde(default)]
	pub matching: Matching,
	pub rules: Vec<RuleGroup>,
}

#[derive(Debug, Deserialize)]
pub struct Scoring {
	/// Tenders scoring at or above this value are flagged relevant.
	#[serde(default = "default_relevance_threshold")]
	pub relevance_threshold: u8,
}

#[derive(Debug, Deserialize)]
pub struct Matching {
	/// Minimum per-field name similarity for a fuzzy duplicate candidate.
	#[serde(default = "default_fuzzy_similarity_threshold")]
	pub fuzzy_similarity_threshold: f32,
}

/// One category of the rule table. Declaration order is the tie breaker when
/// two groups contribute the same weight to a tender.
#[derive(Debug, Deserialize)]
pub struct RuleGroup {
	pub category: String,
	#[serde(default)]
	pub keywords: Vec<KeywordRule>,
	#[serde(default)]
	pub cpv_prefixes: Vec<CpvRule>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordRule {
	pub pattern: String,
	pub weight: u8,
}

#[derive(Debug, Deserialize)]
pub struct CpvRule {
	pub prefix: String,
	pub weight: u8,
}

impl Default for Scoring {
	fn default() -> Self {
		Self { relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD }
	}
}

impl Default for Matching {
	fn default() -> Self {
		Self { fuzzy_similarity_threshold: DEFAULT_FUZZY_SIMILARITY_THRESHOLD }
	}
}

fn default_relevance_threshold() -> u8 {
	DEFAULT_RELEVANCE_THRESHOLD
}

fn default_fuzzy_similarity_threshold() -> f32 {
	DEFAULT_FUZZY_SIMILARITY_THRESHOLD
}
