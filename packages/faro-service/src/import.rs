use serde::Serialize;

use faro_config::Config;
use faro_domain::{
	matcher,
	records::{DuplicateCandidate, LeadDraft, LeadRecord, SuggestedAction},
};

use crate::error::{Error, Result};

/// Duplicate review for one import session. Rows without a candidate default
/// to `import`; candidate rows default to `skip` until overridden.
#[derive(Clone, Debug, Serialize)]
pub struct ImportPlan {
	row_count: usize,
	candidates: Vec<DuplicateCandidate>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RowDecision {
	pub row_index: usize,
	pub action: SuggestedAction,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ImportSummary {
	pub imported: usize,
	pub skipped: usize,
	pub updated: usize,
}

pub fn plan_import(
	rows: &[LeadDraft],
	existing: &[LeadRecord],
	cfg: &Config,
) -> Result<ImportPlan> {
	for (row_index, row) in rows.iter().enumerate() {
		if row.company.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Import row {row_index} has an empty company name."),
			});
		}
	}

	let candidates = matcher::find_duplicates(rows, existing, cfg);

	tracing::info!(
		rows = rows.len(),
		duplicates = candidates.len(),
		"Import planned."
	);

	Ok(ImportPlan { row_count: rows.len(), candidates })
}

impl ImportPlan {
	pub fn candidates(&self) -> &[DuplicateCandidate] {
		&self.candidates
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	/// Override the action for a row that has a duplicate candidate. Rows
	/// without a candidate are always imported and cannot be overridden.
	pub fn set_action(&mut self, row_index: usize, action: SuggestedAction) -> Result<()> {
		let candidate = self
			.candidates
			.iter_mut()
			.find(|candidate| candidate.row_index == row_index)
			.ok_or_else(|| Error::Validation {
				message: format!("Row {row_index} has no duplicate candidate to act on."),
			})?;

		candidate.action = action;

		Ok(())
	}

	/// One decision per row of the batch, in row order.
	pub fn decisions(&self) -> Vec<RowDecision> {
		(0..self.row_count)
			.map(|row_index| RowDecision {
				row_index,
				action: self
					.candidates
					.iter()
					.find(|candidate| candidate.row_index == row_index)
					.map(|candidate| candidate.action)
					.unwrap_or(SuggestedAction::Import),
			})
			.collect()
	}

	pub fn summary(&self) -> ImportSummary {
		let mut summary = ImportSummary::default();

		for decision in self.decisions() {
			match decision.action {
				SuggestedAction::Import => summary.imported += 1,
				SuggestedAction::Skip => summary.skipped += 1,
				SuggestedAction::Update => summary.updated += 1,
			}
		}

		summary
	}
}
