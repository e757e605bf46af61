mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, DEFAULT_STORAGE_KEY, Local, Remote, Service, Storage};

use std::{env, fs, path::Path};

/// Environment variables consulted, in order, for the remote base URL.
pub const API_BASE_ENV: [&str; 2] = ["QUILL_API_BASE", "QUILL_BACKEND_URL"];

pub fn load(path: &Path) -> Result<Config> {
	finish(read(path)?)
}

/// Loads `path` when given, otherwise starts from the local-only defaults. Environment and
/// explicit overrides are applied before validation.
pub fn resolve(path: Option<&Path>, api_base_override: Option<&str>) -> Result<Config> {
	let mut cfg = match path {
		Some(path) => read(path)?,
		None => Config::default(),
	};

	if let Some(api_base) = api_base_from_env(|name| env::var(name).ok()) {
		cfg.remote.api_base = Some(api_base);
	}
	if let Some(api_base) = api_base_override {
		cfg.remote.api_base = Some(api_base.to_string());
	}

	finish(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	if let Some(api_base) = cfg.remote.api_base.as_deref()
		&& !(api_base.starts_with("http://") || api_base.starts_with("https://"))
	{
		return Err(Error::Validation {
			message: "remote.api_base must start with http:// or https://.".to_string(),
		});
	}
	if let Some(timeout_ms) = cfg.remote.timeout_ms
		&& timeout_ms == 0
	{
		return Err(Error::Validation {
			message: "remote.timeout_ms must be greater than zero.".to_string(),
		});
	}

	let key = cfg.storage.local.key.as_str();

	if key.is_empty() {
		return Err(Error::Validation {
			message: "storage.local.key must be non-empty.".to_string(),
		});
	}
	if !key.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-')) {
		return Err(Error::Validation {
			message: "storage.local.key may only contain ASCII letters, digits, '.', '_' and '-'."
				.to_string(),
		});
	}

	Ok(())
}

pub fn api_base_from_env<F>(lookup: F) -> Option<String>
where
	F: Fn(&str) -> Option<String>,
{
	API_BASE_ENV.iter().filter_map(|name| lookup(name)).find(|value| !value.trim().is_empty())
}

fn read(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	toml::from_str(&raw).map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })
}

fn finish(mut cfg: Config) -> Result<Config> {
	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

fn normalize(cfg: &mut Config) {
	cfg.remote.api_base = cfg
		.remote
		.api_base
		.as_deref()
		.map(|base| base.trim().trim_end_matches('/').to_string())
		.filter(|base| !base.is_empty());

	if cfg
		.storage
		.local
		.data_dir
		.as_deref()
		.map(|dir| dir.as_os_str().is_empty())
		.unwrap_or(false)
	{
		cfg.storage.local.data_dir = None;
	}
}
