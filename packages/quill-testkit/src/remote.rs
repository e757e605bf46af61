use std::{
	future::IntoFuture,
	sync::{Arc, Mutex, MutexGuard},
};

use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing,
};
use tokio::{
	net::TcpListener,
	sync::{oneshot, oneshot::Sender},
};
use uuid::Uuid;

use quill_domain::{NewNote, Note, NotePatch};

use crate::Result;

const START_MS: i64 = 1_700_000_000_000;
const STEP_MS: i64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
	/// Serves the notes contract from memory.
	Healthy,
	/// Every route answers `500` with an empty body.
	Failing,
	/// Every route answers `503` with a JSON body, as gateways and proxies do.
	Overloaded,
	/// Every route answers `422` with a JSON error payload.
	Rejecting,
	/// Every route answers `200` with a body that is not JSON.
	Garbled,
}

/// In-memory stand-in for the remote notes API.
pub struct MockRemote {
	base_url: String,
	state: MockState,
	shutdown: Option<Sender<()>>,
}
impl MockRemote {
	pub async fn start() -> Result<Self> {
		Self::start_with(Behavior::Healthy).await
	}

	pub async fn start_with(behavior: Behavior) -> Result<Self> {
		let state = MockState {
			inner: Arc::new(Mutex::new(Inner {
				notes: Vec::new(),
				behavior,
				requests: 0,
				clock_ms: START_MS,
			})),
		};
		let app = Router::new()
			.route("/notes", routing::get(list_notes).post(create_note))
			.route("/notes/{id}", routing::put(update_note).delete(delete_note))
			.with_state(state.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let (tx, rx) = oneshot::channel();
		let server = axum::serve(listener, app).with_graceful_shutdown(async move {
			let _ = rx.await;
		});

		tokio::spawn(async move {
			let _ = server.into_future().await;
		});

		Ok(Self { base_url: format!("http://{addr}"), state, shutdown: Some(tx) })
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn set_behavior(&self, behavior: Behavior) {
		self.state.lock().behavior = behavior;
	}

	pub fn request_count(&self) -> usize {
		self.state.lock().requests
	}

	/// Notes in storage order (insertion order, not sorted).
	pub fn notes(&self) -> Vec<Note> {
		self.state.lock().notes.clone()
	}

	pub fn insert(&self, note: Note) {
		self.state.lock().notes.push(note);
	}
}
impl Drop for MockRemote {
	fn drop(&mut self) {
		if let Some(tx) = self.shutdown.take() {
			let _ = tx.send(());
		}
	}
}

#[derive(Clone)]
struct MockState {
	inner: Arc<Mutex<Inner>>,
}
impl MockState {
	fn lock(&self) -> MutexGuard<'_, Inner> {
		self.inner.lock().unwrap_or_else(|err| err.into_inner())
	}
}

struct Inner {
	notes: Vec<Note>,
	behavior: Behavior,
	requests: usize,
	clock_ms: i64,
}
impl Inner {
	/// Counts the request and answers it directly unless the mock is healthy.
	fn intercept(&mut self) -> Option<Response> {
		self.requests += 1;

		match self.behavior {
			Behavior::Healthy => None,
			Behavior::Failing => Some(StatusCode::INTERNAL_SERVER_ERROR.into_response()),
			Behavior::Overloaded => Some(
				(
					StatusCode::SERVICE_UNAVAILABLE,
					Json(serde_json::json!({ "message": "Service Unavailable" })),
				)
					.into_response(),
			),
			Behavior::Rejecting => Some(
				(
					StatusCode::UNPROCESSABLE_ENTITY,
					Json(serde_json::json!({ "error": "Rejected by remote." })),
				)
					.into_response(),
			),
			Behavior::Garbled => Some((StatusCode::OK, "<html>maintenance</html>").into_response()),
		}
	}

	fn tick(&mut self) -> i64 {
		self.clock_ms += STEP_MS;

		self.clock_ms
	}
}

async fn list_notes(State(state): State<MockState>) -> Response {
	let mut inner = state.lock();

	if let Some(response) = inner.intercept() {
		return response;
	}

	Json(inner.notes.clone()).into_response()
}

async fn create_note(State(state): State<MockState>, Json(input): Json<NewNote>) -> Response {
	let mut inner = state.lock();

	if let Some(response) = inner.intercept() {
		return response;
	}

	let now = inner.tick();
	let note = Note::create(Uuid::new_v4().to_string(), &input, now);

	inner.notes.push(note.clone());

	(StatusCode::CREATED, Json(note)).into_response()
}

async fn update_note(
	State(state): State<MockState>,
	Path(id): Path<String>,
	Json(patch): Json<NotePatch>,
) -> Response {
	let mut inner = state.lock();

	if let Some(response) = inner.intercept() {
		return response;
	}

	let now = inner.tick();
	let Some(note) = inner.notes.iter_mut().find(|note| note.id == id) else {
		return not_found();
	};

	note.apply(&patch, now);

	Json(note.clone()).into_response()
}

async fn delete_note(State(state): State<MockState>, Path(id): Path<String>) -> Response {
	let mut inner = state.lock();

	if let Some(response) = inner.intercept() {
		return response;
	}

	let before = inner.notes.len();

	inner.notes.retain(|note| note.id != id);

	if inner.notes.len() == before {
		return not_found();
	}

	StatusCode::NO_CONTENT.into_response()
}

fn not_found() -> Response {
	(StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "Note not found." })))
		.into_response()
}
