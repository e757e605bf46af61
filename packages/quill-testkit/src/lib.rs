mod error;
mod remote;

pub use error::{Error, Result};
pub use remote::{Behavior, MockRemote};

use std::{
	env, fs,
	net::TcpListener,
	path::{Path, PathBuf},
	sync::atomic::{AtomicI64, AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use quill_domain::Clock;

/// A temporary directory removed on drop.
pub struct ScratchDir {
	path: PathBuf,
}
impl ScratchDir {
	pub fn new(prefix: &str) -> Result<Self> {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_err(|err| Error::Message(format!("System time must be valid: {err}.")))?
			.as_nanos();
		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let pid = std::process::id();
		let mut path = env::temp_dir();

		path.push(format!("{prefix}_{nanos}_{pid}_{ordinal}"));

		fs::create_dir_all(&path)?;

		Ok(Self { path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn join(&self, name: &str) -> PathBuf {
		self.path.join(name)
	}
}
impl Drop for ScratchDir {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.path);
	}
}

/// Clock under test control. With a non-zero step every reading advances the clock.
#[derive(Debug)]
pub struct ManualClock {
	now_ms: AtomicI64,
	step_ms: i64,
}
impl ManualClock {
	pub fn new(start_ms: i64) -> Self {
		Self { now_ms: AtomicI64::new(start_ms), step_ms: 0 }
	}

	pub fn ticking(start_ms: i64, step_ms: i64) -> Self {
		Self { now_ms: AtomicI64::new(start_ms), step_ms }
	}
}
impl Clock for ManualClock {
	fn now_ms(&self) -> i64 {
		self.now_ms.fetch_add(self.step_ms, Ordering::SeqCst)
	}
}

/// A base URL with nothing listening behind it.
pub fn unreachable_base() -> Result<String> {
	let listener = TcpListener::bind("127.0.0.1:0")?;
	let addr = listener.local_addr()?;

	drop(listener);

	Ok(format!("http://{addr}"))
}
