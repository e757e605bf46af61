use quill_domain::{
	NewNote, Note,
	relative::time_ago,
	search,
	validate::{self, RejectCode},
};

fn note(id: &str, title: &str, content: &str) -> Note {
	Note {
		id: id.to_string(),
		title: title.to_string(),
		content: content.to_string(),
		created_at: 0,
		updated_at: 0,
	}
}

#[test]
fn form_requires_a_title() {
	assert_eq!(validate::validate_form("   ", "body"), Err(RejectCode::TitleRequired));
	assert_eq!(RejectCode::TitleRequired.to_string(), "Title is required.");
}

#[test]
fn form_enforces_length_limits_after_trimming() {
	let title_at_limit = "t".repeat(validate::TITLE_MAX_CHARS);
	let title_over = "t".repeat(validate::TITLE_MAX_CHARS + 1);
	let content_over = "c".repeat(validate::CONTENT_MAX_CHARS + 1);
	let padded_title = format!("  {title_at_limit}  ");

	assert!(validate::validate_form(&padded_title, "").is_ok());
	assert_eq!(validate::validate_form(&title_over, ""), Err(RejectCode::TitleTooLong));
	assert_eq!(validate::validate_form("ok", &content_over), Err(RejectCode::ContentTooLong));
}

#[test]
fn form_counts_characters_not_bytes() {
	let title = "é".repeat(validate::TITLE_MAX_CHARS);

	assert!(validate::validate_form(&title, "").is_ok());
}

#[test]
fn valid_form_is_trimmed_and_blank_content_is_absent() {
	let input = validate::validate_form(" Groceries ", "   ").expect("Expected valid form.");

	assert_eq!(input, NewNote { title: "Groceries".to_string(), content: None });

	let input = validate::validate_form("Groceries", " milk ").expect("Expected valid form.");

	assert_eq!(input.content.as_deref(), Some("milk"));
}

#[test]
fn search_is_case_insensitive_over_title_and_content() {
	let notes = vec![
		note("a", "Groceries", "Milk and eggs"),
		note("b", "Ideas", "Build a BIRDHOUSE"),
		note("c", "Todo", ""),
	];
	let by_title: Vec<&str> =
		search::filter(&notes, "GROC").iter().map(|note| note.id.as_str()).collect();
	let by_content: Vec<&str> =
		search::filter(&notes, "birdhouse").iter().map(|note| note.id.as_str()).collect();

	assert_eq!(by_title, vec!["a"]);
	assert_eq!(by_content, vec!["b"]);
	assert!(search::filter(&notes, "nothing-here").is_empty());
}

#[test]
fn blank_query_returns_every_note_in_order() {
	let notes = vec![note("a", "A", ""), note("b", "B", "")];
	let all: Vec<&str> = search::filter(&notes, "  ").iter().map(|note| note.id.as_str()).collect();

	assert_eq!(all, vec!["a", "b"]);
	assert!(search::matches(&notes[0], ""));
}

#[test]
fn time_ago_buckets() {
	let now = 10 * 24 * 60 * 60 * 1_000;

	assert_eq!(time_ago(now, now - 59_000), "just now");
	assert_eq!(time_ago(now, now - 5 * 60_000), "5m ago");
	assert_eq!(time_ago(now, now - 3 * 60 * 60_000), "3h ago");
	assert_eq!(time_ago(now, now - 2 * 24 * 60 * 60_000), "2d ago");
	assert_eq!(time_ago(now, now + 10_000), "just now");
}
