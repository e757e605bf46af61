use quill_domain::{Note, sort_recent_first};

use crate::{Error, NotesService, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
	Remote,
	Local,
}

/// A result together with the store that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served<T> {
	pub value: T,
	pub origin: Origin,
}

impl NotesService {
	/// Notes ordered by `updated_at`, most recent first.
	pub async fn list(&self) -> Result<Vec<Note>> {
		Ok(self.list_served().await?.value)
	}

	/// Reading is always safe to retry locally, so any remote failure falls back.
	pub async fn list_served(&self) -> Result<Served<Vec<Note>>> {
		if self.remote.is_configured() {
			match self.remote.list().await {
				Ok(mut notes) => {
					sort_recent_first(&mut notes);

					return Ok(Served { value: notes, origin: Origin::Remote });
				},
				Err(err) => {
					tracing::warn!(op = "list", error = %err, "Remote list failed. Using local store.");
				},
			}
		}

		if !self.local.is_available() {
			return Err(Error::Unavailable {
				message: "No remote store is reachable and no local store is available."
					.to_string(),
			});
		}

		let notes = self.local.list().await?;

		Ok(Served { value: notes, origin: Origin::Local })
	}
}
