use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "notes.app.data.v1";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub service: Service,
	#[serde(default)]
	pub remote: Remote,
	#[serde(default)]
	pub storage: Storage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Remote {
	/// Base URL of the notes API. Absent means local-only operation.
	pub api_base: Option<String>,
	/// Optional request timeout. Absent leaves timing to the transport.
	pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Storage {
	#[serde(default)]
	pub local: Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Local {
	/// Directory backing the on-device store. Absent yields an inert store.
	pub data_dir: Option<PathBuf>,
	#[serde(default = "default_storage_key")]
	pub key: String,
	#[serde(default = "default_seed_samples")]
	pub seed_samples: bool,
}

impl Default for Service {
	fn default() -> Self {
		Self { log_level: default_log_level() }
	}
}

impl Default for Local {
	fn default() -> Self {
		Self { data_dir: None, key: default_storage_key(), seed_samples: default_seed_samples() }
	}
}

impl Remote {
	pub fn is_configured(&self) -> bool {
		self.api_base.is_some()
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_storage_key() -> String {
	DEFAULT_STORAGE_KEY.to_string()
}

fn default_seed_samples() -> bool {
	true
}
