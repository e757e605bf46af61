pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Note not found: {id}")]
	NotFound { id: String },
	#[error("Remote store rejected the request ({status}): {message}")]
	Remote { status: u16, message: String },
	#[error("Remote store returned an unusable response: {message}")]
	InvalidResponse { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Invalid configuration: {message}")]
	InvalidConfig { message: String },
	#[error("{message}")]
	Unavailable { message: String },
}
impl From<quill_storage::Error> for Error {
	fn from(err: quill_storage::Error) -> Self {
		match err {
			quill_storage::Error::NotFound(id) => Self::NotFound { id },
			other => Self::Storage { message: other.to_string() },
		}
	}
}

impl From<quill_remote::Error> for Error {
	fn from(err: quill_remote::Error) -> Self {
		match err {
			quill_remote::Error::Rejected { status, message } => Self::Remote { status, message },
			quill_remote::Error::InvalidResponse { message } => Self::InvalidResponse { message },
			other => Self::Unavailable { message: other.to_string() },
		}
	}
}
