use serde::Serialize;
use uuid::Uuid;

use faro_config::Config;
use faro_domain::{
	records::{TenderRecord, TenderStatus},
	scorer::{self, ScoreInput},
};

use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, Serialize)]
pub struct ReclassifyReport {
	/// Records whose score was successfully recomputed and attached.
	pub updated_count: usize,
	/// Non-discarded records the batch attempted.
	pub total_count: usize,
	/// Records whose relevance flag changed against their previous score.
	/// Unscored records count as a flip when they come out relevant.
	pub relevance_flips: usize,
	pub failures: Vec<ReclassifyFailure>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReclassifyFailure {
	pub tender_id: Uuid,
	pub reason: String,
}

/// Re-score every non-discarded tender with the current rule table. One
/// record's failure never aborts the batch; failures are collected and
/// reported. Lifecycle states are left untouched.
pub fn reclassify_all(tenders: &mut [TenderRecord], cfg: &Config) -> Result<ReclassifyReport> {
	if cfg.rules.is_empty() {
		return Err(Error::Configuration {
			message: "Rule table must contain at least one rule group.".to_string(),
		});
	}

	let mut report = ReclassifyReport::default();

	for tender in tenders.iter_mut() {
		if tender.status == TenderStatus::Discarded {
			continue;
		}

		report.total_count += 1;

		match scorer::score(&ScoreInput::from(&*tender), cfg) {
			Ok(result) => {
				let was_relevant =
					tender.score.as_ref().map(|score| score.relevant).unwrap_or(false);

				if was_relevant != result.relevant {
					report.relevance_flips += 1;
				}

				tender.score = Some(result);
				report.updated_count += 1;
			},
			Err(err) => {
				tracing::warn!(
					tender_id = %tender.id,
					reason = err.as_str(),
					"Tender scoring failed; batch continues."
				);
				report.failures.push(ReclassifyFailure {
					tender_id: tender.id,
					reason: err.as_str().to_string(),
				});
			},
		}
	}

	tracing::info!(
		updated = report.updated_count,
		total = report.total_count,
		flips = report.relevance_flips,
		failed = report.failures.len(),
		"Reclassify batch finished."
	);

	Ok(report)
}
