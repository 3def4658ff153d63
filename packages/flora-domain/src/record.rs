use serde::{Deserialize, Serialize};

/// A plant observation as read back from the document store.
///
/// `date_added` is the normalized display form produced at ingestion; records
/// are read-only past that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
	pub id: String,
	pub name: String,
	#[serde(rename = "type")]
	pub plant_type: String,
	pub location: String,
	pub date_added: String,
}
