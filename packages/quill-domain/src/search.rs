use crate::Note;

/// Case-insensitive substring match over title and content. A blank query matches everything.
pub fn matches(note: &Note, query: &str) -> bool {
	let query = query.trim().to_lowercase();

	query.is_empty() || matches_normalized(note, &query)
}

pub fn filter<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
	let query = query.trim().to_lowercase();

	if query.is_empty() {
		return notes.iter().collect();
	}

	notes.iter().filter(|note| matches_normalized(note, &query)).collect()
}

fn matches_normalized(note: &Note, query: &str) -> bool {
	note.title.to_lowercase().contains(query) || note.content.to_lowercase().contains(query)
}
