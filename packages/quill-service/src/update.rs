use quill_domain::{Note, NotePatch};

use crate::{NotesService, Result};

impl NotesService {
	/// Partial update. Unknown ids fail with `NotFound` locally; a reachable remote's own
	/// not-found answer comes back as `Error::Remote`.
	pub async fn update(&self, note_id: &str, patch: &NotePatch) -> Result<Note> {
		let patch = patch.trimmed();

		if let Some(note) =
			self.remote_first("update", self.remote.update(note_id, &patch)).await?
		{
			return Ok(note);
		}

		Ok(self.local.update(note_id, &patch).await?)
	}
}
