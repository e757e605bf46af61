use std::{collections::HashMap, future::Future, pin::Pin, sync::Mutex};

use crate::Result;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// On-device key-value persistence holding raw string values.
pub trait KeyValueStore
where
	Self: Send + Sync,
{
	fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>>>;

	fn set<'a>(&'a self, key: &'a str, value: &'a str) -> BoxFuture<'a, Result<()>>;

	/// `false` for stores that silently drop writes.
	fn is_available(&self) -> bool {
		true
	}
}

#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: Mutex<HashMap<String, String>>,
}

/// Stands in when no on-device store can be used. Reads find nothing and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertStore;

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn snapshot(&self, key: &str) -> Option<String> {
		self.entries.lock().unwrap_or_else(|err| err.into_inner()).get(key).cloned()
	}

	fn insert(&self, key: &str, value: &str) {
		self.entries
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.insert(key.to_string(), value.to_string());
	}
}

impl KeyValueStore for MemoryStore {
	fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
		let value = self.snapshot(key);

		Box::pin(async move { Ok(value) })
	}

	fn set<'a>(&'a self, key: &'a str, value: &'a str) -> BoxFuture<'a, Result<()>> {
		self.insert(key, value);

		Box::pin(async move { Ok(()) })
	}
}

impl KeyValueStore for InertStore {
	fn get<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
		Box::pin(async move { Ok(None) })
	}

	fn set<'a>(&'a self, _key: &'a str, _value: &'a str) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move { Ok(()) })
	}

	fn is_available(&self) -> bool {
		false
	}
}
