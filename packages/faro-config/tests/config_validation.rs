use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use faro_config::{Config, Error};

const SAMPLE_RULES_TOML: &str = include_str!("fixtures/sample_rules.toml");

fn write_temp_config(payload: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("faro_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load(payload: &str) -> faro_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = faro_config::load(&path);

	let _ = fs::remove_file(&path);

	result
}

fn sample_with<F>(mutate: F) -> String
where
	F: FnOnce(&mut toml::Table),
{
	let mut value: Value =
		toml::from_str(SAMPLE_RULES_TOML).expect("Failed to parse sample rule table.");
	let root = value.as_table_mut().expect("Sample rule table must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to render sample rule table.")
}

#[test]
fn loads_sample_rule_table() {
	let cfg = load(SAMPLE_RULES_TOML).expect("Sample rule table must load.");

	assert_eq!(cfg.scoring.relevance_threshold, 40);
	assert_eq!(cfg.rules.len(), 2);
	assert_eq!(cfg.rules[0].category, "Drones and inspection");
	assert_eq!(cfg.rules[0].keywords.len(), 2);
	assert_eq!(cfg.rules[0].cpv_prefixes[0].prefix, "7135");
}

#[test]
fn thresholds_default_when_sections_are_omitted() {
	let payload = sample_with(|root| {
		root.remove("scoring");
		root.remove("matching");
	});
	let cfg = load(&payload).expect("Rule table without thresholds must load.");

	assert_eq!(cfg.scoring.relevance_threshold, faro_config::DEFAULT_RELEVANCE_THRESHOLD);
	assert!(
		(cfg.matching.fuzzy_similarity_threshold
			- faro_config::DEFAULT_FUZZY_SIMILARITY_THRESHOLD)
			.abs() < f32::EPSILON
	);
}

#[test]
fn rejects_threshold_above_hundred() {
	let payload = sample_with(|root| {
		let scoring = root
			.get_mut("scoring")
			.and_then(Value::as_table_mut)
			.expect("Sample must include [scoring].");

		scoring.insert("relevance_threshold".to_string(), Value::Integer(101));
	});

	assert!(matches!(load(&payload), Err(Error::Validation { .. })));
}

#[test]
fn rejects_empty_rule_set() {
	let payload = sample_with(|root| {
		root.insert("rules".to_string(), Value::Array(Vec::new()));
	});

	assert!(matches!(load(&payload), Err(Error::Validation { .. })));
}

#[test]
fn rejects_zero_weight_keyword() {
	let payload = sample_with(|root| {
		let keyword = root
			.get_mut("rules")
			.and_then(Value::as_array_mut)
			.and_then(|rules| rules.first_mut())
			.and_then(Value::as_table_mut)
			.and_then(|group| group.get_mut("keywords"))
			.and_then(Value::as_array_mut)
			.and_then(|keywords| keywords.first_mut())
			.and_then(Value::as_table_mut)
			.expect("Sample must include a keyword rule.");

		keyword.insert("weight".to_string(), Value::Integer(0));
	});

	assert!(matches!(load(&payload), Err(Error::Validation { .. })));
}

#[test]
fn rejects_non_digit_cpv_prefix() {
	let payload = sample_with(|root| {
		let cpv = root
			.get_mut("rules")
			.and_then(Value::as_array_mut)
			.and_then(|rules| rules.first_mut())
			.and_then(Value::as_table_mut)
			.and_then(|group| group.get_mut("cpv_prefixes"))
			.and_then(Value::as_array_mut)
			.and_then(|prefixes| prefixes.first_mut())
			.and_then(Value::as_table_mut)
			.expect("Sample must include a CPV rule.");

		cpv.insert("prefix".to_string(), Value::String("71-35".to_string()));
	});

	assert!(matches!(load(&payload), Err(Error::Validation { .. })));
}

#[test]
fn rejects_fuzzy_threshold_out_of_range() {
	for threshold in [0.0, -0.5, 1.5] {
		let payload = sample_with(|root| {
			let matching = root
				.get_mut("matching")
				.and_then(Value::as_table_mut)
				.expect("Sample must include [matching].");

			matching.insert("fuzzy_similarity_threshold".to_string(), Value::Float(threshold));
		});

		assert!(matches!(load(&payload), Err(Error::Validation { .. })));
	}
}

#[test]
fn trims_patterns_and_categories() {
	let payload = sample_with(|root| {
		let group = root
			.get_mut("rules")
			.and_then(Value::as_array_mut)
			.and_then(|rules| rules.first_mut())
			.and_then(Value::as_table_mut)
			.expect("Sample must include a rule group.");

		group.insert("category".to_string(), Value::String("  Drones  ".to_string()));
	});
	let cfg = load(&payload).expect("Padded categories must still load.");

	assert_eq!(cfg.rules[0].category, "Drones");
}

#[test]
fn read_error_carries_path() {
	let missing = env::temp_dir().join("faro_config_test_missing.toml");

	assert!(matches!(faro_config::load(&missing), Err(Error::ReadConfig { .. })));
}
