use std::sync::Arc;

use quill::{
	controller::{LOAD_FAILED, Modal, NoteForm, NotesController},
	render::Page,
};
use quill_config::{DEFAULT_STORAGE_KEY, Remote};
use quill_remote::RemoteNotes;
use quill_service::{Mode, NotesService};
use quill_storage::{InertStore, KeyValueStore, LocalNotes, MemoryStore};
use quill_testkit::{Behavior, ManualClock, MockRemote};

const START_MS: i64 = 1_700_000_000_000;

fn local(store: Arc<dyn KeyValueStore>, seed_samples: bool) -> LocalNotes {
	LocalNotes::new(
		store,
		Arc::new(ManualClock::ticking(START_MS, 1_000)),
		DEFAULT_STORAGE_KEY,
		seed_samples,
	)
}

fn local_controller(store: Arc<MemoryStore>) -> NotesController {
	let service =
		NotesService::new(Arc::new(RemoteNotes::unconfigured()), Arc::new(local(store, false)));

	NotesController::new(service)
}

fn remote_controller(base: &str) -> NotesController {
	let cfg = Remote { api_base: Some(base.to_string()), timeout_ms: Some(5_000) };
	let remote = RemoteNotes::new(&cfg).expect("Failed to build remote client.");
	let service =
		NotesService::new(Arc::new(remote), Arc::new(local(Arc::new(MemoryStore::new()), false)));

	NotesController::new(service)
}

async fn add(controller: &mut NotesController, title: &str, content: &str) {
	controller.open_new();

	assert!(controller.submit(&NoteForm::new(title, content)).await, "Expected {title} to save.");
}

#[tokio::test]
async fn mount_loads_seeded_notes_most_recent_first() {
	let service = NotesService::new(
		Arc::new(RemoteNotes::unconfigured()),
		Arc::new(local(Arc::new(MemoryStore::new()), true)),
	);
	let mut controller = NotesController::new(service);

	assert!(controller.loading());

	controller.mount().await;

	assert!(!controller.loading());
	assert_eq!(controller.error(), None);
	assert_eq!(controller.mode(), Mode::LocalOnly);
	assert_eq!(controller.notes().len(), 2);
	assert_eq!(controller.notes()[0].title, "Ocean Professional Theme");
	assert_eq!(controller.count_label(), "2 notes");
}

#[tokio::test]
async fn mount_without_any_store_shows_the_banner_and_stays_usable() {
	let service = NotesService::new(
		Arc::new(RemoteNotes::unconfigured()),
		Arc::new(local(Arc::new(InertStore), true)),
	);
	let mut controller = NotesController::new(service);

	controller.mount().await;

	assert_eq!(controller.error(), Some(LOAD_FAILED));
	assert!(!controller.loading());
	assert!(controller.notes().is_empty());

	add(&mut controller, "Scratch", "").await;

	assert_eq!(controller.notes().len(), 1);

	controller.dismiss_error();

	assert_eq!(controller.error(), None);
}

#[tokio::test]
async fn submitting_a_new_note_prepends_it_and_closes_the_form() {
	let mut controller = local_controller(Arc::new(MemoryStore::new()));

	controller.mount().await;
	add(&mut controller, "A", "").await;
	add(&mut controller, "  Groceries  ", "  eggs ").await;

	assert_eq!(controller.modal(), &Modal::Closed);
	assert_eq!(controller.count_label(), "2 notes");
	assert_eq!(controller.notes()[0].title, "Groceries");
	assert_eq!(controller.notes()[0].content, "eggs");
	assert_eq!(controller.notes()[1].title, "A");
}

#[tokio::test]
async fn invalid_forms_keep_the_modal_open_without_touching_storage() {
	let store = Arc::new(MemoryStore::new());
	let mut controller = local_controller(store.clone());

	controller.mount().await;
	controller.open_new();

	assert!(!controller.submit(&NoteForm::new("   ", "body")).await);
	assert_eq!(controller.form_error(), Some("Title is required."));
	assert_eq!(controller.modal(), &Modal::New);

	assert!(!controller.submit(&NoteForm::new("x".repeat(121), "")).await);
	assert_eq!(controller.form_error(), Some("Title must be at most 120 characters."));

	assert!(!controller.submit(&NoteForm::new("Long", "y".repeat(5_001))).await);
	assert_eq!(controller.form_error(), Some("Content must be at most 5000 characters."));

	assert!(controller.notes().is_empty());
	assert_eq!(store.snapshot(DEFAULT_STORAGE_KEY), None);

	controller.close_modal();

	assert_eq!(controller.form_error(), None);
	assert_eq!(controller.modal(), &Modal::Closed);
}

#[tokio::test]
async fn editing_replaces_the_cached_note_in_place() {
	let mut controller = local_controller(Arc::new(MemoryStore::new()));

	controller.mount().await;
	add(&mut controller, "Groceries", "eggs").await;
	add(&mut controller, "Todo", "").await;

	let id = controller.notes()[1].id.clone();
	let before = controller.notes()[1].updated_at;
	let mut form = controller.open_edit(&id).expect("Expected cached note.");

	assert_eq!(form, NoteForm::new("Groceries", "eggs"));
	assert!(matches!(controller.modal(), Modal::Edit(note) if note.id == id));

	form.content = "milk".to_string();

	assert!(controller.submit(&form).await);

	let edited = &controller.notes()[1];

	assert_eq!(edited.id, id);
	assert_eq!(edited.title, "Groceries");
	assert_eq!(edited.content, "milk");
	assert!(edited.updated_at > before);
	assert_eq!(controller.notes()[0].title, "Todo");
	assert_eq!(controller.open_edit("missing"), None);
}

#[tokio::test]
async fn deleting_removes_the_note_after_the_service_confirms() {
	let mut controller = local_controller(Arc::new(MemoryStore::new()));

	controller.mount().await;
	add(&mut controller, "A", "").await;
	add(&mut controller, "B", "").await;

	let a = controller.notes()[1].id.clone();

	assert!(controller.delete(&a).await);
	assert_eq!(controller.count_label(), "1 note");

	controller.refresh().await;

	assert!(controller.notes().iter().all(|note| note.id != a));
}

#[tokio::test]
async fn failed_delete_keeps_the_cache_and_shows_the_banner() {
	let mock = MockRemote::start().await.expect("Failed to start mock remote.");
	let mut controller = remote_controller(mock.base_url());

	controller.mount().await;
	add(&mut controller, "Keep", "").await;

	assert!(!controller.delete("missing").await);
	assert_eq!(controller.notes().len(), 1);
	assert!(controller.error().is_some_and(|error| error.starts_with("Failed to delete note")));
}

#[tokio::test]
async fn failed_save_keeps_the_form_open_and_the_cache_unchanged() {
	let mock = MockRemote::start().await.expect("Failed to start mock remote.");
	let mut controller = remote_controller(mock.base_url());

	controller.mount().await;
	add(&mut controller, "Keep", "").await;
	mock.set_behavior(Behavior::Rejecting);
	controller.open_new();

	assert!(!controller.submit(&NoteForm::new("Refused", "")).await);
	assert_eq!(controller.modal(), &Modal::New);
	assert_eq!(controller.notes().len(), 1);
	assert!(controller.error().is_some_and(|error| error.starts_with("Failed to save note")));
}

#[tokio::test]
async fn search_filters_the_cache_without_calling_the_service() {
	let mock = MockRemote::start().await.expect("Failed to start mock remote.");
	let mut controller = remote_controller(mock.base_url());

	controller.mount().await;
	add(&mut controller, "Groceries", "eggs and MILK").await;
	add(&mut controller, "Todo", "call the bank").await;

	let requests = mock.request_count();

	controller.set_search("milk");

	let visible = controller.visible();

	assert_eq!(visible.len(), 1);
	assert_eq!(visible[0].title, "Groceries");
	assert_eq!(controller.count_label(), "1 note");

	controller.set_search("  ");

	assert_eq!(controller.visible().len(), 2);
	assert_eq!(mock.request_count(), requests);
}

#[tokio::test]
async fn page_shows_banner_count_and_relative_times() {
	let mut controller = local_controller(Arc::new(MemoryStore::new()));

	controller.mount().await;
	add(&mut controller, "Groceries", "").await;

	let page = Page::new(&controller, START_MS + 5 * 60 * 1_000).to_string();

	assert!(page.starts_with("Notes (local)\n"));
	assert!(page.contains("1 note\n"));
	assert!(page.contains("Groceries"));
	assert!(page.contains("(No content)"));
	assert!(page.contains("Updated 5m ago"));

	let empty = local_controller(Arc::new(MemoryStore::new()));
	let page = Page::new(&empty, START_MS).to_string();

	assert!(page.contains("Loading..."));
}
