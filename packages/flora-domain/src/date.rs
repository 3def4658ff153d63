use time::{
	OffsetDateTime, UtcOffset,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::format_description,
};

/// Shown when the store has not assigned a creation timestamp yet.
pub const NO_DATE: &str = "No date data available";
/// Shown when a record carries a timestamp that cannot be read as an instant.
pub const INVALID_TIMESTAMP: &str = "Invalid";

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]");

/// A timestamp as it arrives from the document store, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTimestamp {
	/// Store-native wrapper carrying its own instant conversion.
	Store { seconds: i64, nanos: i32 },
	EpochMillis(i64),
	Text(String),
	Instant(OffsetDateTime),
}

/// Normalizes a raw timestamp into its canonical display form using the
/// process-local wall clock, falling back to UTC when the local offset cannot
/// be determined.
pub fn normalize(raw: Option<&RawTimestamp>) -> String {
	let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

	normalize_at(raw, offset)
}

/// Same as [`normalize`] with an explicit wall-clock offset.
///
/// Absent input maps to [`NO_DATE`]; anything that fails to resolve into a
/// valid instant maps to [`INVALID_TIMESTAMP`]. A bad timestamp on one record
/// must never fail the fetch that carried it, so there is no error path here.
pub fn normalize_at(raw: Option<&RawTimestamp>, offset: UtcOffset) -> String {
	let Some(raw) = raw else {
		return NO_DATE.to_string();
	};
	let Some(instant) = to_instant(raw) else {
		return INVALID_TIMESTAMP.to_string();
	};

	instant
		.to_offset(offset)
		.format(DISPLAY_FORMAT)
		.unwrap_or_else(|_| INVALID_TIMESTAMP.to_string())
}

fn to_instant(raw: &RawTimestamp) -> Option<OffsetDateTime> {
	match raw {
		RawTimestamp::Store { seconds, nanos } => {
			let nanos = i128::from(*seconds) * 1_000_000_000 + i128::from(*nanos);

			OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
		},
		RawTimestamp::EpochMillis(millis) =>
			OffsetDateTime::from_unix_timestamp_nanos(i128::from(*millis) * 1_000_000).ok(),
		RawTimestamp::Text(text) => OffsetDateTime::parse(text, &Rfc3339).ok(),
		RawTimestamp::Instant(instant) => Some(*instant),
	}
}
