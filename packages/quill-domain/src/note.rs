use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
	pub id: String,
	pub title: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub content: String,
	pub created_at: i64,
	pub updated_at: i64,
}

/// Input for `create`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewNote {
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
}

/// Partial input for `update`. Only supplied fields change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotePatch {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
}

impl Note {
	pub fn create(id: String, input: &NewNote, now_ms: i64) -> Self {
		let input = input.trimmed();

		Self {
			id,
			title: input.title,
			content: input.content.unwrap_or_default(),
			created_at: now_ms,
			updated_at: now_ms,
		}
	}

	/// Applies `patch` and refreshes `updated_at`, which always moves strictly forward.
	pub fn apply(&mut self, patch: &NotePatch, now_ms: i64) {
		let patch = patch.trimmed();

		if let Some(title) = patch.title {
			self.title = title;
		}
		if let Some(content) = patch.content {
			self.content = content;
		}

		self.updated_at = now_ms.max(self.updated_at.saturating_add(1)).max(self.created_at);
	}
}

impl NewNote {
	pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
		Self { title: title.into(), content }
	}

	pub fn trimmed(&self) -> Self {
		Self {
			title: self.title.trim().to_string(),
			content: self.content.as_deref().map(|content| content.trim().to_string()),
		}
	}
}

impl NotePatch {
	pub fn title(title: impl Into<String>) -> Self {
		Self { title: Some(title.into()), content: None }
	}

	pub fn content(content: impl Into<String>) -> Self {
		Self { title: None, content: Some(content.into()) }
	}

	pub fn trimmed(&self) -> Self {
		Self {
			title: self.title.as_deref().map(|title| title.trim().to_string()),
			content: self.content.as_deref().map(|content| content.trim().to_string()),
		}
	}
}

/// Orders by `updated_at`, most recent first.
pub fn sort_recent_first(notes: &mut [Note]) {
	notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn note(updated_at: i64) -> Note {
		Note {
			id: format!("n{updated_at}"),
			title: "t".to_string(),
			content: String::new(),
			created_at: 0,
			updated_at,
		}
	}

	#[test]
	fn create_trims_and_stamps_both_timestamps() {
		let input = NewNote::new("  Groceries ", Some("  milk\n".to_string()));
		let note = Note::create("id-1".to_string(), &input, 42);

		assert_eq!(note.title, "Groceries");
		assert_eq!(note.content, "milk");
		assert_eq!(note.created_at, 42);
		assert_eq!(note.updated_at, 42);
	}

	#[test]
	fn apply_keeps_unspecified_fields_and_moves_forward_within_same_millisecond() {
		let mut note =
			Note::create("id-1".to_string(), &NewNote::new("Groceries", None), 1_000);

		note.apply(&NotePatch::content(" milk "), 1_000);

		assert_eq!(note.title, "Groceries");
		assert_eq!(note.content, "milk");
		assert_eq!(note.updated_at, 1_001);
		assert_eq!(note.created_at, 1_000);
	}

	#[test]
	fn sorts_descending_by_updated_at() {
		let mut notes = vec![note(1), note(3), note(2)];

		sort_recent_first(&mut notes);

		let order: Vec<i64> = notes.iter().map(|note| note.updated_at).collect();

		assert_eq!(order, vec![3, 2, 1]);
	}

	#[test]
	fn missing_or_null_content_reads_as_empty() {
		let missing: Note = serde_json::from_str(
			r#"{"id":"a","title":"A","createdAt":1,"updatedAt":2}"#,
		)
		.expect("Failed to parse note without content.");
		let null: Note = serde_json::from_str(
			r#"{"id":"a","title":"A","content":null,"createdAt":1,"updatedAt":2}"#,
		)
		.expect("Failed to parse note with null content.");

		assert_eq!(missing.content, "");
		assert_eq!(null.content, "");
	}

	#[test]
	fn patch_serializes_only_supplied_fields() {
		let json = serde_json::to_value(NotePatch::content("milk")).expect("serialize failed");

		assert_eq!(json, serde_json::json!({ "content": "milk" }));
	}
}
