use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub store: Store,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Store {
	/// Collection holding the plant documents.
	pub collection: String,
	/// Field the store stamps on insert and the fetch path normalizes.
	pub timestamp_field: String,
}

fn default_log_level() -> String {
	"info".to_string()
}
