//! Shared fixtures for tests across the workspace. Nothing here is meant for
//! production use.

use time::OffsetDateTime;
use uuid::Uuid;

use faro_config::{Config, CpvRule, KeywordRule, Matching, RuleGroup, Scoring};
use faro_domain::records::{LeadDraft, LeadRecord, TenderRecord};

/// The rule table most tests run against: one drone/inspection group and one
/// energy-audit group, default thresholds.
pub fn rule_config() -> Config {
	Config {
		scoring: Scoring { relevance_threshold: 40 },
		matching: Matching { fuzzy_similarity_threshold: 0.85 },
		rules: vec![
			RuleGroup {
				category: "Drones and inspection".to_string(),
				keywords: vec![
					KeywordRule { pattern: "drone".to_string(), weight: 40 },
					KeywordRule { pattern: "UAV".to_string(), weight: 30 },
				],
				cpv_prefixes: vec![CpvRule { prefix: "7135".to_string(), weight: 20 }],
			},
			RuleGroup {
				category: "Energy audits".to_string(),
				keywords: vec![KeywordRule {
					pattern: "auditoria energetica".to_string(),
					weight: 35,
				}],
				cpv_prefixes: vec![CpvRule { prefix: "7131".to_string(), weight: 15 }],
			},
		],
	}
}

pub fn tender(title: &str) -> TenderRecord {
	TenderRecord::new(Uuid::new_v4(), title).expect("fixture tender must be valid")
}

pub fn tender_with_cpv(title: &str, cpv_codes: &[&str]) -> TenderRecord {
	tender(title)
		.with_cpv_codes(cpv_codes.iter().map(|code| code.to_string()).collect())
		.expect("fixture CPV codes must be valid")
}

pub fn lead(company: &str, contact: &str, email: &str) -> LeadRecord {
	LeadRecord::new(Uuid::new_v4(), company, contact, email, OffsetDateTime::now_utc())
		.expect("fixture lead must be valid")
}

pub fn lead_updated_at(
	company: &str,
	contact: &str,
	email: &str,
	updated_at: OffsetDateTime,
) -> LeadRecord {
	LeadRecord::new(Uuid::new_v4(), company, contact, email, updated_at)
		.expect("fixture lead must be valid")
}

pub fn draft(company: &str, contact: Option<&str>, email: Option<&str>) -> LeadDraft {
	let mut draft = LeadDraft::new(company).expect("fixture draft must be valid");

	draft.contact = contact.map(str::to_string);
	draft.email = email.map(str::to_string);

	draft
}
