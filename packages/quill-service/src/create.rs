use quill_domain::{NewNote, Note};

use crate::{NotesService, Result};

impl NotesService {
	/// Title and content are trimmed before either store sees them.
	pub async fn create(&self, input: &NewNote) -> Result<Note> {
		let input = input.trimmed();

		if let Some(note) = self.remote_first("create", self.remote.create(&input)).await? {
			return Ok(note);
		}

		Ok(self.local.create(&input).await?)
	}
}
