use quill_domain::{Note, id};

const HOUR_MS: i64 = 60 * 60 * 1_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Sample notes written into a fresh store.
pub fn sample_notes(now_ms: i64) -> Vec<Note> {
	vec![
		Note {
			id: id::new_note_id(now_ms),
			title: "Welcome to Notes".to_string(),
			content: "This is your personal notes space. Create, edit, and delete notes. Your notes are saved locally for now."
				.to_string(),
			created_at: now_ms - 2 * DAY_MS,
			updated_at: now_ms - 20 * HOUR_MS,
		},
		Note {
			id: id::new_note_id(now_ms),
			title: "Ocean Professional Theme".to_string(),
			content: "Primary #2563EB, Amber accents #F59E0B, Error #EF4444. Clean UI, rounded corners, subtle gradients."
				.to_string(),
			created_at: now_ms - DAY_MS,
			updated_at: now_ms - 30 * 60 * 1_000,
		},
	]
}
