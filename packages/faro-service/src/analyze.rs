use faro_config::Config;
use faro_domain::{
	records::{ScoreResult, TenderRecord, TenderStatus},
	scorer::{self, ScoreInput},
};

use crate::error::{Error, Result};

/// Score one tender and attach the result. Lifecycle state is never changed
/// here; discarded tenders are rejected because nothing reads their score.
pub fn analyze(tender: &mut TenderRecord, cfg: &Config) -> Result<ScoreResult> {
	if tender.status == TenderStatus::Discarded {
		return Err(Error::Validation {
			message: "Discarded tenders are not scored.".to_string(),
		});
	}

	let result = scorer::score(&ScoreInput::from(&*tender), cfg)?;

	tracing::debug!(
		tender_id = %tender.id,
		score = result.score,
		relevant = result.relevant,
		category = result.category.as_deref().unwrap_or("-"),
		"Tender scored."
	);

	tender.score = Some(result.clone());

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use faro_config::{Config, KeywordRule, Matching, RuleGroup, Scoring};
	use uuid::Uuid;

	fn config() -> Config {
		Config {
			scoring: Scoring { relevance_threshold: 40 },
			matching: Matching::default(),
			rules: vec![RuleGroup {
				category: "Drones".to_string(),
				keywords: vec![KeywordRule { pattern: "drone".to_string(), weight: 60 }],
				cpv_prefixes: Vec::new(),
			}],
		}
	}

	#[test]
	fn attaches_the_result_to_the_record() {
		let cfg = config();
		let mut tender =
			TenderRecord::new(Uuid::new_v4(), "Inspección con drones").unwrap();
		let result = analyze(&mut tender, &cfg).unwrap();

		assert_eq!(result.score, 60);
		assert_eq!(tender.score, Some(result));
		assert_eq!(tender.status, TenderStatus::New);
	}

	#[test]
	fn rejects_discarded_tenders() {
		let cfg = config();
		let mut tender = TenderRecord::new(Uuid::new_v4(), "Inspección").unwrap();

		tender.status = TenderStatus::Discarded;

		assert!(matches!(analyze(&mut tender, &cfg), Err(Error::Validation { .. })));
		assert_eq!(tender.score, None);
	}

	#[test]
	fn empty_rule_table_is_a_configuration_error() {
		let cfg = Config {
			scoring: Scoring::default(),
			matching: Matching::default(),
			rules: Vec::new(),
		};
		let mut tender = TenderRecord::new(Uuid::new_v4(), "Inspección").unwrap();

		assert!(matches!(analyze(&mut tender, &cfg), Err(Error::Configuration { .. })));
	}
}
