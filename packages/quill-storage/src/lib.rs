pub mod file;
pub mod kv;
pub mod local;
pub mod seed;

mod error;

pub use error::Error;
pub use file::FileStore;
pub use kv::{BoxFuture, InertStore, KeyValueStore, MemoryStore};
pub use local::LocalNotes;

use std::sync::Arc;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Picks the on-device store once. A usable data directory yields a [`FileStore`]; anything
/// else yields the [`InertStore`].
pub fn open(cfg: &quill_config::Local) -> Arc<dyn KeyValueStore> {
	let Some(dir) = cfg.data_dir.as_deref() else {
		tracing::warn!("No local data directory configured. Local store is inert.");

		return Arc::new(InertStore);
	};

	match FileStore::open(dir) {
		Ok(store) => {
			tracing::info!(dir = %dir.display(), "Local store opened.");

			Arc::new(store)
		},
		Err(err) => {
			tracing::warn!(dir = %dir.display(), error = %err, "Local store unavailable. Falling back to inert store.");

			Arc::new(InertStore)
		},
	}
}
