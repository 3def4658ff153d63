pub mod add;
pub mod coordinator;
pub mod fetch;

use std::sync::Arc;

pub use add::{AddPlantRequest, AddPlantResponse};
pub use coordinator::{FetchCoordinator, FetchState, HeaderLabel};

use flora_config::Config;
use flora_store::DocumentStore;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	Store { message: String },
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::Store { message } => write!(f, "Store error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<flora_store::Error> for ServiceError {
	fn from(err: flora_store::Error) -> Self {
		Self::Store { message: err.to_string() }
	}
}

/// Query and insert surface over an injected document store.
pub struct PlantService {
	pub cfg: Config,
	pub store: Arc<dyn DocumentStore>,
}

impl PlantService {
	pub fn new(cfg: Config, store: Arc<dyn DocumentStore>) -> Self {
		Self { cfg, store }
	}
}
