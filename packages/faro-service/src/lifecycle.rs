use faro_domain::{
	lifecycle,
	records::{TenderRecord, TenderStatus},
};

use crate::error::{Error, Result};

/// First detail view. Idempotent for already-viewed and tracked tenders; the
/// UI calls this on every open.
pub fn mark_viewed(tender: &mut TenderRecord) -> Result<()> {
	match tender.status {
		TenderStatus::New => {
			tender.status = lifecycle::transition(tender.status, TenderStatus::Viewed)?;

			tracing::debug!(tender_id = %tender.id, "Tender viewed.");

			Ok(())
		},
		TenderStatus::Viewed | TenderStatus::Tracking | TenderStatus::Discarded => Ok(()),
	}
}

/// Explicit user action. Requires the tender to have been viewed.
pub fn track(tender: &mut TenderRecord) -> Result<()> {
	tender.status = lifecycle::transition(tender.status, TenderStatus::Tracking)?;

	tracing::info!(tender_id = %tender.id, "Tender tracked.");

	Ok(())
}

/// Explicit user action. Terminal; re-discarding is reported as an error.
pub fn discard(tender: &mut TenderRecord) -> Result<()> {
	if tender.status == TenderStatus::Discarded {
		return Err(Error::InvalidTransition {
			message: "Tender is already discarded.".to_string(),
		});
	}

	tender.status = lifecycle::transition(tender.status, TenderStatus::Discarded)?;

	tracing::info!(tender_id = %tender.id, "Tender discarded.");

	Ok(())
}
