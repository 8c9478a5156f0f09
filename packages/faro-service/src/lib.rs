pub mod analyze;
pub mod error;
pub mod import;
pub mod lifecycle;
pub mod reclassify;

pub use analyze::analyze;
pub use error::{Error, Result};
pub use import::{ImportPlan, ImportSummary, RowDecision, plan_import};
pub use lifecycle::{discard, mark_viewed, track};
pub use reclassify::{ReclassifyFailure, ReclassifyReport, reclassify_all};

use faro_config::Config;
use faro_domain::records::{
	LeadDraft, LeadRecord, ScoreResult, TenderRecord, TenderStatus,
};

/// Read access to the existing lead collection. The engine only ever asks for
/// a fully-materialized snapshot; consistency of that snapshot is the
/// caller's concern.
pub trait LeadSource {
	fn list_leads(&self) -> Result<Vec<LeadRecord>>;
}

/// Read access to the ingested tenders.
pub trait TenderSource {
	fn list_tenders(&self, filter: &TenderFilter) -> Result<Vec<TenderRecord>>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TenderFilter {
	pub status: Option<TenderStatus>,
	pub relevant_only: bool,
}

impl TenderFilter {
	pub fn matches(&self, tender: &TenderRecord) -> bool {
		if let Some(status) = self.status
			&& tender.status != status
		{
			return false;
		}
		if self.relevant_only
			&& !tender.score.as_ref().map(|score| score.relevant).unwrap_or(false)
		{
			return false;
		}

		true
	}
}

/// The engine: one loaded rule table plus the operations the backend calls.
/// Every operation is synchronous and owns no shared mutable state, so one
/// engine can serve concurrent request handlers as long as each call gets its
/// own record snapshot.
pub struct RelevanceEngine {
	pub cfg: Config,
}

impl RelevanceEngine {
	pub fn new(cfg: Config) -> Self {
		Self { cfg }
	}

	pub fn analyze(&self, tender: &mut TenderRecord) -> Result<ScoreResult> {
		analyze::analyze(tender, &self.cfg)
	}

	pub fn reclassify_all(&self, tenders: &mut [TenderRecord]) -> Result<ReclassifyReport> {
		reclassify::reclassify_all(tenders, &self.cfg)
	}

	pub fn plan_import(
		&self,
		rows: &[LeadDraft],
		existing: &[LeadRecord],
	) -> Result<ImportPlan> {
		import::plan_import(rows, existing, &self.cfg)
	}

	/// Import planning against a snapshot fetched from the lead repository.
	pub fn plan_import_from(
		&self,
		rows: &[LeadDraft],
		leads: &dyn LeadSource,
	) -> Result<ImportPlan> {
		let existing = leads.list_leads()?;

		self.plan_import(rows, &existing)
	}

	/// Fetch every non-discarded tender, re-score the batch and hand the
	/// mutated records back for the caller to persist.
	pub fn reclassify_from(
		&self,
		tenders: &dyn TenderSource,
	) -> Result<(Vec<TenderRecord>, ReclassifyReport)> {
		let mut records = tenders.list_tenders(&TenderFilter::default())?;
		let report = self.reclassify_all(&mut records)?;

		Ok((records, report))
	}
}
