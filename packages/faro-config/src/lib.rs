mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, CpvRule, DEFAULT_FUZZY_SIMILARITY_THRESHOLD, DEFAULT_RELEVANCE_THRESHOLD, KeywordRule,
	Matching, RuleGroup, Scoring,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.scoring.relevance_threshold > 100 {
		return Err(Error::Validation {
			message: "scoring.relevance_threshold must be 100 or less.".to_string(),
		});
	}
	if !cfg.matching.fuzzy_similarity_threshold.is_finite() {
		return Err(Error::Validation {
			message: "matching.fuzzy_similarity_threshold must be a finite number.".to_string(),
		});
	}
	if cfg.matching.fuzzy_similarity_threshold <= 0.0
		|| cfg.matching.fuzzy_similarity_threshold > 1.0
	{
		return Err(Error::Validation {
			message: "matching.fuzzy_similarity_threshold must be greater than zero and 1.0 or less."
				.to_string(),
		});
	}
	if cfg.rules.is_empty() {
		return Err(Error::Validation { message: "rules must be non-empty.".to_string() });
	}

	for group in &cfg.rules {
		if group.category.trim().is_empty() {
			return Err(Error::Validation {
				message: "rules.category must be non-empty.".to_string(),
			});
		}
		if group.keywords.is_empty() && group.cpv_prefixes.is_empty() {
			return Err(Error::Validation {
				message: format!(
					"Rule group {:?} must declare at least one keyword or CPV prefix.",
					group.category
				),
			});
		}

		for keyword in &group.keywords {
			if keyword.pattern.trim().is_empty() {
				return Err(Error::Validation {
					message: format!(
						"Rule group {:?} declares a keyword with an empty pattern.",
						group.category
					),
				});
			}
			if keyword.weight == 0 || keyword.weight > 100 {
				return Err(Error::Validation {
					message: format!(
						"Keyword {:?} weight must be in the range 1-100.",
						keyword.pattern
					),
				});
			}
		}
		for cpv in &group.cpv_prefixes {
			if cpv.prefix.is_empty() || !cpv.prefix.chars().all(|ch| ch.is_ascii_digit()) {
				return Err(Error::Validation {
					message: format!(
						"CPV prefix {:?} must be a non-empty string of digits.",
						cpv.prefix
					),
				});
			}
			if cpv.weight == 0 || cpv.weight > 100 {
				return Err(Error::Validation {
					message: format!("CPV prefix {:?} weight must be in the range 1-100.", cpv.prefix),
				});
			}
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for group in &mut cfg.rules {
		group.category = group.category.trim().to_string();

		for keyword in &mut group.keywords {
			keyword.pattern = keyword.pattern.trim().to_string();
		}
		for cpv in &mut group.cpv_prefixes {
			cpv.prefix = cpv.prefix.trim().to_string();
		}
	}
}
