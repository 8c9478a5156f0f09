use time::OffsetDateTime;
use uuid::Uuid;

use faro_config::{Config, CpvRule, KeywordRule, Matching, RuleGroup, Scoring};
use faro_domain::{
	matcher, normalize,
	records::{LeadDraft, LeadRecord, MatchKind, SuggestedAction, TenderRecord},
	scorer::{self, ScoreInput},
};

fn rule_config() -> Config {
	Config {
		scoring: Scoring { relevance_threshold: 40 },
		matching: Matching { fuzzy_similarity_threshold: 0.85 },
		rules: vec![RuleGroup {
			category: "Drones and inspection".to_string(),
			keywords: vec![
				KeywordRule { pattern: "drone".to_string(), weight: 40 },
				KeywordRule { pattern: "UAV".to_string(), weight: 30 },
			],
			cpv_prefixes: vec![CpvRule { prefix: "7135".to_string(), weight: 20 }],
		}],
	}
}

#[test]
fn scores_a_record_end_to_end() {
	let cfg = rule_config();
	let tender = TenderRecord::new(Uuid::new_v4(), "Servicio de inspección con drones")
		.unwrap()
		.with_cpv_codes(vec!["71355000-1".to_string()])
		.unwrap();
	let result = scorer::score(&ScoreInput::from(&tender), &cfg).unwrap();

	assert_eq!(result.score, 60);
	assert!(result.relevant);
	assert_eq!(result.relevant, result.score >= cfg.scoring.relevance_threshold);
	assert!(result.score <= scorer::MAX_SCORE);
}

#[test]
fn score_results_round_trip_through_json() {
	let cfg = rule_config();
	let tender = TenderRecord::new(Uuid::new_v4(), "Inspección con UAV").unwrap();
	let result = scorer::score(&ScoreInput::from(&tender), &cfg).unwrap();
	let encoded = serde_json::to_string(&result).unwrap();
	let decoded: faro_domain::records::ScoreResult = serde_json::from_str(&encoded).unwrap();

	assert_eq!(decoded, result);
}

#[test]
fn exact_email_duplicate_is_flagged_for_skip() {
	let cfg = rule_config();
	let existing = vec![
		LeadRecord::new(Uuid::new_v4(), "Acme Corp", "Ana Perez", "a@b.com", OffsetDateTime::now_utc())
			.unwrap(),
	];
	let mut row = LeadDraft::new("Acme").unwrap();

	row.email = Some("a@b.com".to_string());

	let candidates = matcher::find_duplicates(&[row], &existing, &cfg);

	assert_eq!(candidates.len(), 1);
	assert_eq!(candidates[0].kind, MatchKind::Exact);
	assert_eq!(candidates[0].lead_id, existing[0].id);
	assert_eq!(candidates[0].action, SuggestedAction::Skip);
}

#[test]
fn normalization_backs_both_engines() {
	assert_eq!(normalize::normalize_text("Licitación Pública"), "licitacion publica");
	assert!(normalize::name_similarity("Acme Ingeniería S.L.", "ACME Ingenieria SL") > 0.9);
	assert_eq!(normalize::cpv_digits("71355000-1"), "71355000");
}
