use crate::NewNote;

pub const TITLE_MAX_CHARS: usize = 120;
pub const CONTENT_MAX_CHARS: usize = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
	TitleRequired,
	TitleTooLong,
	ContentTooLong,
}

impl RejectCode {
	pub fn message(self) -> &'static str {
		match self {
			Self::TitleRequired => "Title is required.",
			Self::TitleTooLong => "Title must be at most 120 characters.",
			Self::ContentTooLong => "Content must be at most 5000 characters.",
		}
	}
}

impl std::fmt::Display for RejectCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message())
	}
}

/// Boundary check for the note form. Returns the trimmed input ready for the service.
pub fn validate_form(title: &str, content: &str) -> Result<NewNote, RejectCode> {
	let title = title.trim();
	let content = content.trim();

	if title.is_empty() {
		return Err(RejectCode::TitleRequired);
	}
	if title.chars().count() > TITLE_MAX_CHARS {
		return Err(RejectCode::TitleTooLong);
	}
	if content.chars().count() > CONTENT_MAX_CHARS {
		return Err(RejectCode::ContentTooLong);
	}

	let content = if content.is_empty() { None } else { Some(content.to_string()) };

	Ok(NewNote { title: title.to_string(), content })
}
