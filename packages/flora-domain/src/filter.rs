use serde::{Deserialize, Serialize};

/// The fixed set of record fields a filter may constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
	Name,
	Type,
	Location,
}
impl FilterField {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Type => "type",
			Self::Location => "location",
		}
	}
}

/// Sparse exact-match criteria. A missing slot imposes no constraint; the
/// empty criteria set means "return everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub plant_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
}

impl FilterCriteria {
	/// Builds criteria from raw filter inputs. A slot is included only when
	/// the trimmed input is non-empty; included values keep the exact input
	/// text. Matching stays case-sensitive, so no casing normalization
	/// happens here.
	pub fn build(name: &str, plant_type: &str, location: &str) -> Self {
		Self { name: presence(name), plant_type: presence(plant_type), location: presence(location) }
	}

	pub fn is_empty(&self) -> bool {
		self.name.is_none() && self.plant_type.is_none() && self.location.is_none()
	}

	/// The minimal predicate set, in field order.
	pub fn entries(&self) -> Vec<(FilterField, &str)> {
		let mut entries = Vec::new();

		if let Some(name) = &self.name {
			entries.push((FilterField::Name, name.as_str()));
		}
		if let Some(plant_type) = &self.plant_type {
			entries.push((FilterField::Type, plant_type.as_str()));
		}
		if let Some(location) = &self.location {
			entries.push((FilterField::Location, location.as_str()));
		}

		entries
	}
}

fn presence(input: &str) -> Option<String> {
	if input.trim().is_empty() { None } else { Some(input.to_string()) }
}
