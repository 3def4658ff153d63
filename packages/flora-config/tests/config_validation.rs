use flora_config::{Config, Error, validate};

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
log_level = "info"

[store]
collection      = "plants"
timestamp_field = "dateAdded"
"#;

fn sample_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.")
}

#[test]
fn accepts_the_sample_config() {
	let cfg = sample_config();

	assert!(validate(&cfg).is_ok());
	assert_eq!(cfg.store.collection, "plants");
	assert_eq!(cfg.store.timestamp_field, "dateAdded");
}

#[test]
fn log_level_defaults_to_info() {
	let cfg: Config = toml::from_str(
		r#"
[service]

[store]
collection      = "plants"
timestamp_field = "dateAdded"
"#,
	)
	.expect("Failed to parse config without log level.");

	assert_eq!(cfg.service.log_level, "info");
}

#[test]
fn rejects_an_empty_collection() {
	let mut cfg = sample_config();

	cfg.store.collection = String::new();

	match validate(&cfg) {
		Err(Error::Validation { field, .. }) => assert_eq!(field, "store.collection"),
		other => panic!("Expected a validation error, got {other:?}."),
	}
}

#[test]
fn rejects_an_empty_timestamp_field() {
	let mut cfg = sample_config();

	cfg.store.timestamp_field = String::new();

	match validate(&cfg) {
		Err(Error::Validation { field, .. }) => assert_eq!(field, "store.timestamp_field"),
		other => panic!("Expected a validation error, got {other:?}."),
	}
}

#[test]
fn validation_errors_name_the_offending_field() {
	let mut cfg = sample_config();

	cfg.service.log_level = String::new();

	let err = validate(&cfg).expect_err("Empty log level must be rejected.");

	assert_eq!(err.to_string(), "Invalid config value for service.log_level: must be non-empty.");
}

#[test]
fn load_reports_a_missing_file() {
	let err = flora_config::load(std::path::Path::new("/nonexistent/flora.toml"))
		.expect_err("Missing file must be reported.");

	assert!(matches!(err, Error::ReadConfig { .. }));
	assert!(err.to_string().contains("flora config"));
}
