mod error;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::{
	Client, Method, RequestBuilder, Response, StatusCode, Url,
	header::{ACCEPT, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use quill_domain::{NewNote, Note, NotePatch, sort_recent_first};

const NOTES_SEGMENT: &str = "notes";

/// Client for the remote notes API. Without a base URL every call fails with
/// [`Error::NotConfigured`].
#[derive(Debug, Clone)]
pub struct RemoteNotes {
	base: Option<Url>,
	client: Client,
}
impl RemoteNotes {
	pub fn new(cfg: &quill_config::Remote) -> Result<Self> {
		let base = match cfg.api_base.as_deref() {
			Some(raw) => Some(parse_base(raw)?),
			None => None,
		};
		let mut builder = Client::builder();

		if let Some(timeout_ms) = cfg.timeout_ms {
			builder = builder.timeout(Duration::from_millis(timeout_ms));
		}

		Ok(Self { base, client: builder.build()? })
	}

	pub fn unconfigured() -> Self {
		Self { base: None, client: Client::new() }
	}

	pub fn is_configured(&self) -> bool {
		self.base.is_some()
	}

	/// `GET /notes`, most recently updated first.
	pub async fn list(&self) -> Result<Vec<Note>> {
		let url = self.notes_url(None)?;
		let res = self.send(self.client.request(Method::GET, url)).await?;
		let mut notes: Vec<Note> = decode(res).await?;

		sort_recent_first(&mut notes);

		Ok(notes)
	}

	/// `POST /notes`.
	pub async fn create(&self, input: &NewNote) -> Result<Note> {
		let url = self.notes_url(None)?;
		let res = self.send(self.client.request(Method::POST, url).json(input)).await?;

		decode(res).await
	}

	/// `PUT /notes/{id}`.
	pub async fn update(&self, note_id: &str, patch: &NotePatch) -> Result<Note> {
		let url = self.notes_url(Some(note_id))?;
		let res = self.send(self.client.request(Method::PUT, url).json(patch)).await?;

		decode(res).await
	}

	/// `DELETE /notes/{id}`. Any 2xx counts as success and the body is ignored.
	pub async fn remove(&self, note_id: &str) -> Result<()> {
		let url = self.notes_url(Some(note_id))?;

		self.send(self.client.request(Method::DELETE, url)).await?;

		Ok(())
	}

	fn notes_url(&self, note_id: Option<&str>) -> Result<Url> {
		let mut url = self.base.clone().ok_or(Error::NotConfigured)?;

		{
			let mut segments = url.path_segments_mut().map_err(|()| Error::InvalidBase {
				message: "Base URL cannot carry a path.".to_string(),
			})?;

			segments.pop_if_empty().push(NOTES_SEGMENT);

			if let Some(note_id) = note_id {
				segments.push(note_id);
			}
		}

		Ok(url)
	}

	async fn send(&self, req: RequestBuilder) -> Result<Response> {
		let res = req
			.header(CONTENT_TYPE, "application/json")
			.header(ACCEPT, "application/json")
			.send()
			.await?;
		let status = res.status();

		tracing::debug!(url = %res.url(), status = status.as_u16(), "Remote notes response.");

		if status.is_success() {
			return Ok(res);
		}

		let body = res.bytes().await.unwrap_or_default();

		Err(classify_failure(status, &body))
	}
}

/// Only a 4xx answer carrying a JSON error payload is the remote's verdict. Server errors,
/// timeouts, throttling and bodies without a payload are transport failures.
fn classify_failure(status: StatusCode, body: &[u8]) -> Error {
	let retryable = status.is_server_error()
		|| status == StatusCode::REQUEST_TIMEOUT
		|| status == StatusCode::TOO_MANY_REQUESTS;

	if retryable || !status.is_client_error() {
		return Error::Status { status: status.as_u16() };
	}

	let message = serde_json::from_slice::<Value>(body).ok().and_then(|json| {
		["error", "message"]
			.iter()
			.find_map(|field| json.get(field).and_then(Value::as_str).map(str::to_string))
	});

	match message {
		Some(message) => Error::Rejected { status: status.as_u16(), message },
		None => Error::Status { status: status.as_u16() },
	}
}

async fn decode<T>(res: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let body = res.bytes().await?;

	serde_json::from_slice(&body).map_err(|err| Error::InvalidResponse { message: err.to_string() })
}

fn parse_base(raw: &str) -> Result<Url> {
	let url = Url::parse(raw).map_err(|err| Error::InvalidBase { message: err.to_string() })?;

	if url.cannot_be_a_base() {
		return Err(Error::InvalidBase { message: format!("{raw} cannot be used as a base URL.") });
	}

	Ok(url)
}
