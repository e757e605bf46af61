use quill_domain::{NewNote, Note, NotePatch, search, validate};
use quill_service::{Mode, NotesService};

pub const LOAD_FAILED: &str = "Failed to load notes; using local mode if available.";

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
	pub title: String,
	pub content: String,
}
impl NoteForm {
	pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
		Self { title: title.into(), content: content.into() }
	}

	pub fn from_note(note: &Note) -> Self {
		Self { title: note.title.clone(), content: note.content.clone() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
	Closed,
	New,
	Edit(Note),
}

/// View-model over [`NotesService`]. Owns the note cache; the stores never touch it.
pub struct NotesController {
	service: NotesService,
	notes: Vec<Note>,
	loading: bool,
	error: Option<String>,
	search: String,
	modal: Modal,
	form_error: Option<String>,
}
impl NotesController {
	pub fn new(service: NotesService) -> Self {
		Self {
			service,
			notes: Vec::new(),
			loading: true,
			error: None,
			search: String::new(),
			modal: Modal::Closed,
			form_error: None,
		}
	}

	pub fn notes(&self) -> &[Note] {
		&self.notes
	}

	pub fn loading(&self) -> bool {
		self.loading
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn search(&self) -> &str {
		&self.search
	}

	pub fn modal(&self) -> &Modal {
		&self.modal
	}

	pub fn form_error(&self) -> Option<&str> {
		self.form_error.as_deref()
	}

	pub fn mode(&self) -> Mode {
		self.service.mode()
	}

	pub async fn mount(&mut self) {
		self.refresh().await;
	}

	/// Replaces the cache with a fresh `list`. On failure the previous cache is kept.
	pub async fn refresh(&mut self) {
		self.loading = true;
		self.error = None;

		match self.service.list().await {
			Ok(notes) => self.notes = notes,
			Err(err) => {
				tracing::warn!(error = %err, "Failed to load notes.");

				self.error = Some(LOAD_FAILED.to_string());
			},
		}

		self.loading = false;
	}

	pub fn open_new(&mut self) {
		self.modal = Modal::New;
		self.form_error = None;
	}

	/// Opens the edit form for a cached note and returns it prefilled.
	pub fn open_edit(&mut self, note_id: &str) -> Option<NoteForm> {
		let note = self.notes.iter().find(|note| note.id == note_id)?.clone();
		let form = NoteForm::from_note(&note);

		self.modal = Modal::Edit(note);
		self.form_error = None;

		Some(form)
	}

	pub fn close_modal(&mut self) {
		self.modal = Modal::Closed;
		self.form_error = None;
	}

	/// Validates and saves the open form. Returns whether the form was saved and closed.
	pub async fn submit(&mut self, form: &NoteForm) -> bool {
		let input = match validate::validate_form(&form.title, &form.content) {
			Ok(input) => input,
			Err(code) => {
				self.form_error = Some(code.message().to_string());

				return false;
			},
		};

		self.form_error = None;

		let saved = match self.modal.clone() {
			Modal::Closed => return false,
			Modal::New => self.create(&input).await,
			Modal::Edit(note) => self.update(&note.id, input).await,
		};

		match saved {
			Ok(()) => {
				self.modal = Modal::Closed;

				true
			},
			Err(err) => {
				tracing::warn!(error = %err, "Failed to save note.");

				self.error = Some(format!("Failed to save note: {err}"));

				false
			},
		}
	}

	/// Drops the note from the cache only once the service confirms the removal.
	pub async fn delete(&mut self, note_id: &str) -> bool {
		match self.service.remove(note_id).await {
			Ok(()) => {
				self.notes.retain(|note| note.id != note_id);

				true
			},
			Err(err) => {
				tracing::warn!(note_id, error = %err, "Failed to delete note.");

				self.error = Some(format!("Failed to delete note: {err}"));

				false
			},
		}
	}

	pub fn set_search(&mut self, query: impl Into<String>) {
		self.search = query.into();
	}

	pub fn visible(&self) -> Vec<&Note> {
		search::filter(&self.notes, &self.search)
	}

	pub fn dismiss_error(&mut self) {
		self.error = None;
	}

	pub fn count_label(&self) -> String {
		match self.visible().len() {
			1 => "1 note".to_string(),
			count => format!("{count} notes"),
		}
	}

	async fn create(&mut self, input: &NewNote) -> quill_service::Result<()> {
		let note = self.service.create(input).await?;

		self.notes.insert(0, note);

		Ok(())
	}

	async fn update(&mut self, note_id: &str, input: NewNote) -> quill_service::Result<()> {
		let patch =
			NotePatch { title: Some(input.title), content: Some(input.content.unwrap_or_default()) };
		let note = self.service.update(note_id, &patch).await?;

		if let Some(slot) = self.notes.iter_mut().find(|cached| cached.id == note.id) {
			*slot = note;
		}

		Ok(())
	}
}
