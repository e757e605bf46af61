pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Remote store is not configured.")]
	NotConfigured,
	#[error("Invalid remote base URL: {message}")]
	InvalidBase { message: String },
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error("Remote store responded with status {status}.")]
	Status { status: u16 },
	#[error("Remote store rejected the request ({status}): {message}")]
	Rejected { status: u16, message: String },
	#[error("Remote store response could not be decoded: {message}")]
	InvalidResponse { message: String },
}
impl Error {
	/// Transport and availability failures: the remote could not give a usable answer, so the
	/// caller may fall back. Everything else is an answer from a reachable remote.
	pub fn is_transport(&self) -> bool {
		matches!(
			self,
			Self::NotConfigured | Self::InvalidBase { .. } | Self::Reqwest(_) | Self::Status { .. }
		)
	}
}
