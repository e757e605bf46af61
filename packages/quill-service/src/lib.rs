pub mod create;
pub mod delete;
pub mod list;
pub mod update;

mod error;

pub use error::{Error, Result};
pub use list::{Origin, Served};

use std::{future::Future, sync::Arc};

use quill_config::Config;
use quill_domain::{Clock, NewNote, Note, NotePatch, SystemClock};
use quill_remote::RemoteNotes;
use quill_storage::{BoxFuture, LocalNotes};

pub trait RemoteStore
where
	Self: Send + Sync,
{
	fn is_configured(&self) -> bool;

	fn list(&self) -> BoxFuture<'_, quill_remote::Result<Vec<Note>>>;

	fn create<'a>(&'a self, input: &'a NewNote) -> BoxFuture<'a, quill_remote::Result<Note>>;

	fn update<'a>(
		&'a self,
		note_id: &'a str,
		patch: &'a NotePatch,
	) -> BoxFuture<'a, quill_remote::Result<Note>>;

	fn remove<'a>(&'a self, note_id: &'a str) -> BoxFuture<'a, quill_remote::Result<()>>;
}

pub trait LocalStore
where
	Self: Send + Sync,
{
	fn is_available(&self) -> bool;

	fn list(&self) -> BoxFuture<'_, quill_storage::Result<Vec<Note>>>;

	fn create<'a>(&'a self, input: &'a NewNote) -> BoxFuture<'a, quill_storage::Result<Note>>;

	fn update<'a>(
		&'a self,
		note_id: &'a str,
		patch: &'a NotePatch,
	) -> BoxFuture<'a, quill_storage::Result<Note>>;

	fn remove<'a>(&'a self, note_id: &'a str) -> BoxFuture<'a, quill_storage::Result<()>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Remote,
	LocalOnly,
}

/// Remote-first notes service with a local fallback. Each call is served by exactly one store.
#[derive(Clone)]
pub struct NotesService {
	remote: Arc<dyn RemoteStore>,
	local: Arc<dyn LocalStore>,
}

impl RemoteStore for RemoteNotes {
	fn is_configured(&self) -> bool {
		RemoteNotes::is_configured(self)
	}

	fn list(&self) -> BoxFuture<'_, quill_remote::Result<Vec<Note>>> {
		Box::pin(RemoteNotes::list(self))
	}

	fn create<'a>(&'a self, input: &'a NewNote) -> BoxFuture<'a, quill_remote::Result<Note>> {
		Box::pin(RemoteNotes::create(self, input))
	}

	fn update<'a>(
		&'a self,
		note_id: &'a str,
		patch: &'a NotePatch,
	) -> BoxFuture<'a, quill_remote::Result<Note>> {
		Box::pin(RemoteNotes::update(self, note_id, patch))
	}

	fn remove<'a>(&'a self, note_id: &'a str) -> BoxFuture<'a, quill_remote::Result<()>> {
		Box::pin(RemoteNotes::remove(self, note_id))
	}
}

impl LocalStore for LocalNotes {
	fn is_available(&self) -> bool {
		LocalNotes::is_available(self)
	}

	fn list(&self) -> BoxFuture<'_, quill_storage::Result<Vec<Note>>> {
		Box::pin(LocalNotes::list(self))
	}

	fn create<'a>(&'a self, input: &'a NewNote) -> BoxFuture<'a, quill_storage::Result<Note>> {
		Box::pin(LocalNotes::create(self, input))
	}

	fn update<'a>(
		&'a self,
		note_id: &'a str,
		patch: &'a NotePatch,
	) -> BoxFuture<'a, quill_storage::Result<Note>> {
		Box::pin(LocalNotes::update(self, note_id, patch))
	}

	fn remove<'a>(&'a self, note_id: &'a str) -> BoxFuture<'a, quill_storage::Result<()>> {
		Box::pin(LocalNotes::remove(self, note_id))
	}
}

impl NotesService {
	pub fn new(remote: Arc<dyn RemoteStore>, local: Arc<dyn LocalStore>) -> Self {
		Self { remote, local }
	}

	pub fn from_config(cfg: &Config) -> Result<Self> {
		Self::from_config_with_clock(cfg, Arc::new(SystemClock))
	}

	pub fn from_config_with_clock(cfg: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
		let remote = RemoteNotes::new(&cfg.remote)
			.map_err(|err| Error::InvalidConfig { message: err.to_string() })?;
		let local = LocalNotes::from_config(&cfg.storage.local, clock);

		tracing::info!(
			remote = remote.is_configured(),
			local = local.is_available(),
			"Notes service ready."
		);

		Ok(Self::new(Arc::new(remote), Arc::new(local)))
	}

	pub fn mode(&self) -> Mode {
		if self.remote.is_configured() { Mode::Remote } else { Mode::LocalOnly }
	}

	pub fn local_available(&self) -> bool {
		self.local.is_available()
	}

	/// Runs `call` against the remote when one is configured.
	///
	/// `Ok(Some(_))` is the remote's answer. `Ok(None)` means the remote is unusable and the
	/// caller should serve from the local store. Domain failures from a reachable remote are
	/// returned as errors and must not fall back.
	pub(crate) async fn remote_first<T, F>(&self, op: &'static str, call: F) -> Result<Option<T>>
	where
		F: Future<Output = quill_remote::Result<T>>,
	{
		if !self.remote.is_configured() {
			return Ok(None);
		}

		match call.await {
			Ok(value) => Ok(Some(value)),
			Err(err) if err.is_transport() => {
				tracing::warn!(op, error = %err, "Remote store unavailable. Using local store.");

				Ok(None)
			},
			Err(err) => {
				tracing::warn!(op, error = %err, "Remote store rejected the request.");

				Err(err.into())
			},
		}
	}
}
