use time::macros::{datetime, offset};

use flora_domain::{
	FilterCriteria, FilterField, INVALID_TIMESTAMP, NO_DATE, RawTimestamp, date,
};

#[test]
fn blank_inputs_build_empty_criteria() {
	assert!(FilterCriteria::build("", "", "").is_empty());
	assert!(FilterCriteria::build("   ", "\t", " \n ").is_empty());
}

#[test]
fn builds_only_the_supplied_keys() {
	let criteria = FilterCriteria::build("Fern", "", "Patio");

	assert_eq!(criteria.name.as_deref(), Some("Fern"));
	assert_eq!(criteria.plant_type, None);
	assert_eq!(criteria.location.as_deref(), Some("Patio"));
	assert_eq!(
		criteria.entries(),
		vec![(FilterField::Name, "Fern"), (FilterField::Location, "Patio")],
	);
}

#[test]
fn preserves_exact_values_without_normalization() {
	let criteria = FilterCriteria::build(" Fern ", "SHADE", "");

	assert_eq!(criteria.name.as_deref(), Some(" Fern "));
	assert_eq!(criteria.plant_type.as_deref(), Some("SHADE"));
}

#[test]
fn criteria_serializes_as_a_sparse_mapping() {
	let criteria = FilterCriteria::build("", "Sun", "");
	let value = serde_json::to_value(&criteria).expect("Failed to serialize criteria.");

	assert_eq!(value, serde_json::json!({ "type": "Sun" }));
}

#[test]
fn absent_timestamp_uses_the_no_date_literal() {
	assert_eq!(date::normalize(None), NO_DATE);
}

#[test]
fn unparseable_timestamp_uses_the_invalid_literal() {
	let raw = RawTimestamp::Text("not a date".to_string());

	assert_eq!(date::normalize(Some(&raw)), INVALID_TIMESTAMP);
}

#[test]
fn formats_epoch_millis_with_zero_padding() {
	let millis = datetime!(2024-01-05 08:03 UTC).unix_timestamp() * 1_000;
	let raw = RawTimestamp::EpochMillis(millis);

	assert_eq!(date::normalize_at(Some(&raw), time::UtcOffset::UTC), "2024-01-05 08:03");
}

#[test]
fn converts_store_native_timestamps() {
	let instant = datetime!(2023-11-30 23:59:59 UTC);
	let raw = RawTimestamp::Store { seconds: instant.unix_timestamp(), nanos: 500_000_000 };

	assert_eq!(date::normalize_at(Some(&raw), time::UtcOffset::UTC), "2023-11-30 23:59");
}

#[test]
fn parses_rfc3339_text() {
	let raw = RawTimestamp::Text("2024-06-01T14:30:00Z".to_string());

	assert_eq!(date::normalize_at(Some(&raw), time::UtcOffset::UTC), "2024-06-01 14:30");
}

#[test]
fn formats_with_the_requested_wall_clock_offset() {
	let raw = RawTimestamp::Instant(datetime!(2024-01-05 23:30 UTC));

	assert_eq!(date::normalize_at(Some(&raw), offset!(+2)), "2024-01-06 01:30");
}

#[test]
fn out_of_range_store_timestamp_is_invalid() {
	let raw = RawTimestamp::Store { seconds: i64::MAX, nanos: 0 };

	assert_eq!(date::normalize_at(Some(&raw), time::UtcOffset::UTC), INVALID_TIMESTAMP);
}
