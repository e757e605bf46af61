use crate::{NotesService, Result};

impl NotesService {
	/// Hard delete. Locally, removing an unknown id succeeds.
	pub async fn remove(&self, note_id: &str) -> Result<()> {
		if self.remote_first("remove", self.remote.remove(note_id)).await?.is_some() {
			return Ok(());
		}

		Ok(self.local.remove(note_id).await?)
	}
}
