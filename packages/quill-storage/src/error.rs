#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to access local store at {path:?}.")]
	Io { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error("Not found: {0}")]
	NotFound(String),
}
