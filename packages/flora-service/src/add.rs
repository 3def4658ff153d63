use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{PlantService, ServiceError, ServiceResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddPlantRequest {
	pub name: String,
	#[serde(rename = "type")]
	pub plant_type: String,
	pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddPlantResponse {
	pub id: String,
}

impl PlantService {
	/// Inserts a new plant observation. The store assigns the identity and
	/// the creation timestamp; the read path never mutates what it fetches.
	pub async fn add_plant(&self, req: AddPlantRequest) -> ServiceResult<AddPlantResponse> {
		if req.name.trim().is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "name must be non-empty.".to_string(),
			});
		}

		let mut fields = Map::new();

		fields.insert("name".to_string(), Value::String(req.name));
		fields.insert("type".to_string(), Value::String(req.plant_type));
		fields.insert("location".to_string(), Value::String(req.location));

		let id = self
			.store
			.insert(&self.cfg.store.collection, fields, &self.cfg.store.timestamp_field)
			.await?;

		tracing::info!(id = id.as_str(), "Inserted plant document.");

		Ok(AddPlantResponse { id })
	}
}
