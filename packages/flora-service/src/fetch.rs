use serde_json::{Map, Value};

use flora_domain::{FilterCriteria, PlantRecord, RawTimestamp, date};
use flora_store::{Document, Predicate};

use crate::{PlantService, ServiceResult};

impl PlantService {
	/// Retrieves plant records matching `criteria`, conjunctively when more
	/// than one key is present. Empty criteria retrieves the whole
	/// collection. Zero matches is a normal outcome; only a failing store
	/// call is an error. Single attempt, no retries.
	pub async fn fetch_plants(
		&self,
		criteria: &FilterCriteria,
	) -> ServiceResult<Vec<PlantRecord>> {
		let collection = self.cfg.store.collection.as_str();
		let documents = if criteria.is_empty() {
			tracing::info!(collection, "Fetching all plants.");

			self.store.fetch_all(collection).await?
		} else {
			let predicates = criteria
				.entries()
				.into_iter()
				.map(|(field, value)| Predicate::equals(field.as_str(), value))
				.collect::<Vec<_>>();

			tracing::info!(
				collection,
				predicates = predicates.len(),
				"Fetching filtered plants.",
			);

			self.store.fetch_where(collection, &predicates).await?
		};
		let records = documents
			.into_iter()
			.map(|document| self.record_from_document(document))
			.collect::<Vec<_>>();

		tracing::info!(count = records.len(), "Plant fetch completed.");

		Ok(records)
	}

	fn record_from_document(&self, document: Document) -> PlantRecord {
		let raw = document
			.fields
			.get(self.cfg.store.timestamp_field.as_str())
			.and_then(coerce_timestamp);

		PlantRecord {
			id: document.id,
			name: string_field(&document.fields, "name"),
			plant_type: string_field(&document.fields, "type"),
			location: string_field(&document.fields, "location"),
			date_added: date::normalize(raw.as_ref()),
		}
	}
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
	fields.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Maps the heterogeneous timestamp shapes the store may hand back onto
/// [`RawTimestamp`]. `None` means the field is genuinely absent; any present
/// but unusable shape is kept as text so normalization reports it as invalid
/// instead of missing.
fn coerce_timestamp(value: &Value) -> Option<RawTimestamp> {
	match value {
		Value::Null => None,
		Value::Object(map) => match map.get("seconds").and_then(Value::as_i64) {
			Some(seconds) => {
				let nanos = map
					.get("nanos")
					.and_then(Value::as_i64)
					.and_then(|nanos| i32::try_from(nanos).ok())
					.unwrap_or(0);

				Some(RawTimestamp::Store { seconds, nanos })
			},
			None => Some(RawTimestamp::Text(value.to_string())),
		},
		// Only integral millis in i64 range count as an epoch value; floats
		// and oversized integers would otherwise saturate into a plausible
		// date.
		Value::Number(number) => Some(
			number
				.as_i64()
				.map(RawTimestamp::EpochMillis)
				.unwrap_or_else(|| RawTimestamp::Text(value.to_string())),
		),
		Value::String(text) => Some(RawTimestamp::Text(text.clone())),
		other => Some(RawTimestamp::Text(other.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coerces_store_native_wrappers() {
		let value = serde_json::json!({ "seconds": 1_700_000_000, "nanos": 42 });

		assert_eq!(
			coerce_timestamp(&value),
			Some(RawTimestamp::Store { seconds: 1_700_000_000, nanos: 42 }),
		);
	}

	#[test]
	fn coerces_numbers_as_epoch_millis() {
		let value = serde_json::json!(1_700_000_000_000_i64);

		assert_eq!(coerce_timestamp(&value), Some(RawTimestamp::EpochMillis(1_700_000_000_000)));
	}

	#[test]
	fn non_integral_numbers_stay_present_but_invalid() {
		for value in [serde_json::json!(16.25), serde_json::json!(1.7e30), serde_json::json!(u64::MAX)] {
			let raw = coerce_timestamp(&value).expect("Number must stay present.");

			assert_eq!(
				flora_domain::date::normalize(Some(&raw)),
				flora_domain::INVALID_TIMESTAMP,
			);
		}
	}

	#[test]
	fn null_means_absent() {
		assert_eq!(coerce_timestamp(&Value::Null), None);
	}

	#[test]
	fn malformed_wrapper_stays_present_but_invalid() {
		let value = serde_json::json!({ "sec": 1 });
		let raw = coerce_timestamp(&value).expect("Malformed wrapper must stay present.");

		assert_eq!(flora_domain::date::normalize(Some(&raw)), flora_domain::INVALID_TIMESTAMP);
	}
}
