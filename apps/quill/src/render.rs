use std::fmt::{self, Display, Formatter};

use quill_domain::{Note, relative};
use quill_service::Mode;

use crate::controller::NotesController;

const RULE: &str = "────────────────────────────────────────";

/// Plain-text rendering of the controller state.
pub struct Page<'a> {
	controller: &'a NotesController,
	now_ms: i64,
}
impl<'a> Page<'a> {
	pub fn new(controller: &'a NotesController, now_ms: i64) -> Self {
		Self { controller, now_ms }
	}
}
impl Display for Page<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let controller = self.controller;
		let mode = match controller.mode() {
			Mode::Remote => "remote",
			Mode::LocalOnly => "local",
		};

		writeln!(f, "Notes ({mode})")?;

		if let Some(error) = controller.error() {
			writeln!(f, "! {error}")?;
		}
		if controller.loading() {
			return writeln!(f, "Loading...");
		}

		let search = controller.search().trim();

		if search.is_empty() {
			writeln!(f, "{}", controller.count_label())?;
		} else {
			writeln!(f, "{} matching \"{search}\"", controller.count_label())?;
		}

		let visible = controller.visible();

		if visible.is_empty() {
			writeln!(f, "{RULE}")?;
			writeln!(f, "No notes yet")?;

			return writeln!(f, "Use `quill add --title <TITLE>` to create your first note.");
		}

		for note in visible {
			write_card(f, note, self.now_ms)?;
		}

		Ok(())
	}
}

fn write_card(f: &mut Formatter<'_>, note: &Note, now_ms: i64) -> fmt::Result {
	let title = if note.title.is_empty() { "Untitled" } else { note.title.as_str() };

	writeln!(f, "{RULE}")?;
	writeln!(f, "{title}  [{}]", note.id)?;

	if note.content.is_empty() {
		writeln!(f, "  (No content)")?;
	} else {
		for line in note.content.lines() {
			writeln!(f, "  {line}")?;
		}
	}

	writeln!(f, "  Updated {}", relative::time_ago(now_ms, note.updated_at))
}
