use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::normalize;

/// Lifecycle state of an ingested tender.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TenderStatus {
	New,
	Viewed,
	Tracking,
	Discarded,
}

/// Pipeline stage of a CRM lead.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStage {
	New,
	Contacted,
	Qualified,
	Proposal,
	Negotiation,
	Won,
	Lost,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
	Exact,
	Fuzzy,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
	Skip,
	Import,
	Update,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordError {
	EmptyTitle,
	EmptyCompany,
	InvalidCpv,
	InvalidEmail,
}

impl RecordError {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::EmptyTitle => "Title must be non-empty.",
			Self::EmptyCompany => "Company name must be non-empty.",
			Self::InvalidCpv => "CPV code must match NNNNNNNN or NNNNNNNN-N.",
			Self::InvalidEmail => "Email must contain a local part and a domain.",
		}
	}
}

/// A public-procurement opportunity ingested from an external listing service.
/// Deleted only by an external admin operation, never by this engine.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TenderRecord {
	pub id: Uuid,
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub cpv_codes: Vec<String>,
	#[serde(default)]
	pub budget: Option<f64>,
	#[serde(default)]
	pub contracting_body: Option<String>,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub published_at: Option<OffsetDateTime>,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub deadline_at: Option<OffsetDateTime>,
	pub status: TenderStatus,
	#[serde(default)]
	pub score: Option<ScoreResult>,
}

impl TenderRecord {
	pub fn new(id: Uuid, title: impl Into<String>) -> Result<Self, RecordError> {
		let title = title.into();

		if title.trim().is_empty() {
			return Err(RecordError::EmptyTitle);
		}

		Ok(Self {
			id,
			title,
			description: None,
			cpv_codes: Vec::new(),
			budget: None,
			contracting_body: None,
			published_at: None,
			deadline_at: None,
			status: TenderStatus::New,
			score: None,
		})
	}

	pub fn with_cpv_codes(mut self, codes: Vec<String>) -> Result<Self, RecordError> {
		for code in &codes {
			if !normalize::is_valid_cpv(code) {
				return Err(RecordError::InvalidCpv);
			}
		}

		self.cpv_codes = codes;

		Ok(self)
	}
}

/// A CRM sales contact, distinct from a tender.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LeadRecord {
	pub id: Uuid,
	pub company: String,
	pub contact: String,
	pub email: String,
	#[serde(default)]
	pub phone: Option<String>,
	pub stage: LeadStage,
	#[serde(default)]
	pub estimated_value: Option<f64>,
	#[serde(default)]
	pub owner: Option<String>,
	#[serde(default)]
	pub notes: Option<String>,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub follow_up_at: Option<OffsetDateTime>,
	#[serde(default)]
	pub follow_up_kind: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

impl LeadRecord {
	pub fn new(
		id: Uuid,
		company: impl Into<String>,
		contact: impl Into<String>,
		email: impl Into<String>,
		updated_at: OffsetDateTime,
	) -> Result<Self, RecordError> {
		let company = company.into();
		let email = email.into();

		if company.trim().is_empty() {
			return Err(RecordError::EmptyCompany);
		}
		if !is_plausible_email(&email) {
			return Err(RecordError::InvalidEmail);
		}

		Ok(Self {
			id,
			company,
			contact: contact.into(),
			email,
			phone: None,
			stage: LeadStage::New,
			estimated_value: None,
			owner: None,
			notes: None,
			follow_up_at: None,
			follow_up_kind: None,
			updated_at,
		})
	}
}

/// One row of an import batch before it becomes a [`LeadRecord`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LeadDraft {
	pub company: String,
	#[serde(default)]
	pub contact: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub estimated_value: Option<f64>,
	#[serde(default)]
	pub notes: Option<String>,
}

impl LeadDraft {
	pub fn new(company: impl Into<String>) -> Result<Self, RecordError> {
		let company = company.into();

		if company.trim().is_empty() {
			return Err(RecordError::EmptyCompany);
		}

		Ok(Self {
			company,
			contact: None,
			email: None,
			phone: None,
			estimated_value: None,
			notes: None,
		})
	}
}

/// Output of one scoring invocation. Immutable; attached to a tender by the
/// orchestration layer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScoreResult {
	pub score: u8,
	pub relevant: bool,
	pub category: Option<String>,
	pub matched_cpv: Vec<String>,
	pub matched_keywords: Vec<String>,
	pub recommendation: String,
}

/// A suspected duplicate for one row of an import batch. Ephemeral; computed
/// per import session and discarded with it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DuplicateCandidate {
	pub row_index: usize,
	pub lead_id: Uuid,
	pub kind: MatchKind,
	pub similarity: f32,
	pub action: SuggestedAction,
}

fn is_plausible_email(email: &str) -> bool {
	let trimmed = email.trim();
	let Some((local, domain)) = trimmed.split_once('@') else {
		return false;
	};

	!local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
