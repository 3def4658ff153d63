mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Service, Store};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.store.collection.is_empty() {
		return Err(Error::Validation {
			field: "store.collection",
			reason: "must be non-empty.".to_string(),
		});
	}
	if cfg.store.timestamp_field.is_empty() {
		return Err(Error::Validation {
			field: "store.timestamp_field",
			reason: "must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.is_empty() {
		return Err(Error::Validation {
			field: "service.log_level",
			reason: "must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
	cfg.store.collection = cfg.store.collection.trim().to_string();
	cfg.store.timestamp_field = cfg.store.timestamp_field.trim().to_string();
}
