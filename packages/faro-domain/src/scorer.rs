use faro_config::Config;

use crate::{
	normalize,
	records::{ScoreResult, TenderRecord},
};

pub const MAX_SCORE: u8 = 100;

pub const RECOMMENDATION_HIGH: &str = "High priority. Act now.";
pub const RECOMMENDATION_GOOD: &str = "Good fit. Schedule a review.";
pub const RECOMMENDATION_MODERATE: &str = "Moderate fit. Low priority.";
pub const RECOMMENDATION_LOW: &str = "Not relevant. Can be discarded.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScoreError {
	EmptyTitle,
	EmptyRuleTable,
}

impl ScoreError {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::EmptyTitle => "Tender title must be non-empty.",
			Self::EmptyRuleTable => "Rule table must contain at least one rule group.",
		}
	}
}

/// Borrowed view of the fields the scorer reads. Budget is informational and
/// carried on the record only, so it does not appear here.
#[derive(Clone, Copy, Debug)]
pub struct ScoreInput<'a> {
	pub title: &'a str,
	pub description: Option<&'a str>,
	pub cpv_codes: &'a [String],
	pub contracting_body: Option<&'a str>,
}

impl<'a> From<&'a TenderRecord> for ScoreInput<'a> {
	fn from(tender: &'a TenderRecord) -> Self {
		Self {
			title: &tender.title,
			description: tender.description.as_deref(),
			cpv_codes: &tender.cpv_codes,
			contracting_body: tender.contracting_body.as_deref(),
		}
	}
}

/// Score a tender against the configured rule table. Pure and deterministic
/// for a given rule table; the caller owns attaching the result to a record.
pub fn score(input: &ScoreInput<'_>, cfg: &Config) -> Result<ScoreResult, ScoreError> {
	if input.title.trim().is_empty() {
		return Err(ScoreError::EmptyTitle);
	}
	if cfg.rules.is_empty() {
		return Err(ScoreError::EmptyRuleTable);
	}

	let corpus = build_corpus(input);
	let cpv_digits: Vec<String> =
		input.cpv_codes.iter().map(|code| normalize::cpv_digits(code)).collect();
	let mut total = 0_u32;
	let mut matched_keywords = Vec::new();
	let mut matched_cpv = Vec::new();
	// Category of the group contributing the most weight; `>` keeps the first
	// declared group on ties.
	let mut best_group: Option<(&str, u32)> = None;

	for group in &cfg.rules {
		let mut group_weight = 0_u32;

		for rule in &group.keywords {
			let pattern = normalize::normalize_text(&rule.pattern);

			if pattern.is_empty() || !corpus.contains(&pattern) {
				continue;
			}

			group_weight += u32::from(rule.weight);
			matched_keywords.push(rule.pattern.clone());
		}
		for rule in &group.cpv_prefixes {
			let matched = cpv_digits
				.iter()
				.position(|digits| !digits.is_empty() && digits.starts_with(&rule.prefix));
			let Some(index) = matched else {
				continue;
			};

			group_weight += u32::from(rule.weight);
			matched_cpv.push(input.cpv_codes[index].clone());
		}

		total += group_weight;

		if group_weight > 0 && best_group.map(|(_, weight)| group_weight > weight).unwrap_or(true)
		{
			best_group = Some((group.category.as_str(), group_weight));
		}
	}

	matched_keywords.dedup();
	matched_cpv.dedup();

	let score = total.min(u32::from(MAX_SCORE)) as u8;
	let relevant = score >= cfg.scoring.relevance_threshold;

	Ok(ScoreResult {
		score,
		relevant,
		category: best_group.map(|(category, _)| category.to_string()),
		matched_cpv,
		matched_keywords,
		recommendation: recommendation_for(score).to_string(),
	})
}

pub fn recommendation_for(score: u8) -> &'static str {
	match score {
		80.. => RECOMMENDATION_HIGH,
		60..=79 => RECOMMENDATION_GOOD,
		40..=59 => RECOMMENDATION_MODERATE,
		_ => RECOMMENDATION_LOW,
	}
}

fn build_corpus(input: &ScoreInput<'_>) -> String {
	let mut corpus = normalize::normalize_text(input.title);

	for field in [input.description, input.contracting_body].into_iter().flatten() {
		let normalized = normalize::normalize_text(field);

		if normalized.is_empty() {
			continue;
		}

		corpus.push(' ');
		corpus.push_str(&normalized);
	}

	corpus
}
