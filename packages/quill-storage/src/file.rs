use std::{
	fs, io,
	path::{Path, PathBuf},
};

use crate::{BoxFuture, Error, KeyValueStore, Result};

/// One JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
	dir: PathBuf,
}

impl FileStore {
	pub fn open(dir: &Path) -> Result<Self> {
		fs::create_dir_all(dir).map_err(|err| Error::Io { path: dir.to_path_buf(), source: err })?;

		Ok(Self { dir: dir.to_path_buf() })
	}

	pub fn path_for(&self, key: &str) -> PathBuf {
		self.dir.join(format!("{key}.json"))
	}

	async fn read(&self, key: &str) -> Result<Option<String>> {
		let path = self.path_for(key);

		match tokio::fs::read_to_string(&path).await {
			Ok(raw) => Ok(Some(raw)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(err) => Err(Error::Io { path, source: err }),
		}
	}

	async fn write(&self, key: &str, value: &str) -> Result<()> {
		let path = self.path_for(key);
		let tmp = self.dir.join(format!("{key}.json.tmp"));

		tokio::fs::write(&tmp, value)
			.await
			.map_err(|err| Error::Io { path: tmp.clone(), source: err })?;
		tokio::fs::rename(&tmp, &path).await.map_err(|err| Error::Io { path, source: err })?;

		Ok(())
	}
}

impl KeyValueStore for FileStore {
	fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
		Box::pin(self.read(key))
	}

	fn set<'a>(&'a self, key: &'a str, value: &'a str) -> BoxFuture<'a, Result<()>> {
		Box::pin(self.write(key, value))
	}
}
