use std::sync::Arc;

use serde_json::Value;

use quill_domain::{Clock, NewNote, Note, NotePatch, id, sort_recent_first};

use crate::{Error, KeyValueStore, Result, seed};

/// The local fallback store: the whole note list serialized under one key.
#[derive(Clone)]
pub struct LocalNotes {
	store: Arc<dyn KeyValueStore>,
	clock: Arc<dyn Clock>,
	key: String,
	seed_samples: bool,
}

impl LocalNotes {
	pub fn new(
		store: Arc<dyn KeyValueStore>,
		clock: Arc<dyn Clock>,
		key: impl Into<String>,
		seed_samples: bool,
	) -> Self {
		Self { store, clock, key: key.into(), seed_samples }
	}

	pub fn from_config(cfg: &quill_config::Local, clock: Arc<dyn Clock>) -> Self {
		Self::new(crate::open(cfg), clock, cfg.key.clone(), cfg.seed_samples)
	}

	pub fn is_available(&self) -> bool {
		self.store.is_available()
	}

	/// Missing or unreadable entries read as an empty list.
	pub async fn read_all(&self) -> Result<Vec<Note>> {
		Ok(self.read_entry().await?.notes)
	}

	/// Replaces the whole stored collection.
	pub async fn write_all(&self, notes: &[Note]) -> Result<()> {
		let raw = serde_json::to_string(notes)?;

		self.store.set(&self.key, &raw).await
	}

	/// Writes the sample notes when the key has never been written. Returns whether it did.
	pub async fn seed_if_empty(&self) -> Result<bool> {
		if !self.store.is_available() || self.store.get(&self.key).await?.is_some() {
			return Ok(false);
		}

		let samples = seed::sample_notes(self.clock.now_ms());

		self.write_all(&samples).await?;

		tracing::info!(key = %self.key, count = samples.len(), "Seeded local store.");

		Ok(true)
	}

	pub async fn list(&self) -> Result<Vec<Note>> {
		if self.seed_samples {
			self.seed_if_empty().await?;
		}

		let mut notes = self.read_all().await?;

		sort_recent_first(&mut notes);

		Ok(notes)
	}

	pub async fn create(&self, input: &NewNote) -> Result<Note> {
		let now = self.clock.now_ms();
		let note = Note::create(id::new_note_id(now), input, now);
		let mut entry = self.read_entry().await?;

		entry.notes.insert(0, note.clone());

		self.write_entry(&entry).await?;

		Ok(note)
	}

	pub async fn update(&self, note_id: &str, patch: &NotePatch) -> Result<Note> {
		let mut entry = self.read_entry().await?;
		let Some(note) = entry.notes.iter_mut().find(|note| note.id == note_id) else {
			return Err(Error::NotFound(note_id.to_string()));
		};

		note.apply(patch, self.clock.now_ms());

		let updated = note.clone();

		self.write_entry(&entry).await?;

		Ok(updated)
	}

	/// Removing an unknown id succeeds without touching the store.
	pub async fn remove(&self, note_id: &str) -> Result<()> {
		let mut entry = self.read_entry().await?;
		let before = entry.notes.len();

		entry.notes.retain(|note| note.id != note_id);

		if entry.notes.len() == before {
			return Ok(());
		}

		self.write_entry(&entry).await
	}

	async fn read_entry(&self) -> Result<Entry> {
		let Some(raw) = self.store.get(&self.key).await? else {
			return Ok(Entry::default());
		};

		Ok(parse_entry(&self.key, &raw))
	}

	/// Writes the notes followed by the stored elements that could not be read, untouched.
	async fn write_entry(&self, entry: &Entry) -> Result<()> {
		let mut items =
			entry.notes.iter().map(serde_json::to_value).collect::<serde_json::Result<Vec<_>>>()?;

		items.extend(entry.unreadable.iter().cloned());

		let raw = serde_json::to_string(&items)?;

		self.store.set(&self.key, &raw).await
	}
}

/// A stored collection split into readable notes and elements kept as they were.
#[derive(Debug, Default)]
struct Entry {
	notes: Vec<Note>,
	unreadable: Vec<Value>,
}

fn parse_entry(key: &str, raw: &str) -> Entry {
	let items = match serde_json::from_str::<Value>(raw) {
		Ok(Value::Array(items)) => items,
		Ok(_) => {
			tracing::warn!(%key, "Local store entry is not a list. Treating it as empty.");

			return Entry::default();
		},
		Err(err) => {
			tracing::warn!(%key, error = %err, "Local store entry is corrupted. Treating it as empty.");

			return Entry::default();
		},
	};
	let mut entry = Entry::default();

	for item in items {
		match serde_json::from_value::<Note>(item.clone()) {
			Ok(note) => entry.notes.push(note),
			Err(_) => entry.unreadable.push(item),
		}
	}

	if !entry.unreadable.is_empty() {
		tracing::warn!(
			%key,
			skipped = entry.unreadable.len(),
			"Skipped malformed notes in local store. They are kept on write."
		);
	}

	entry
}
