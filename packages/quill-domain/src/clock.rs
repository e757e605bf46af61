use time::OffsetDateTime;

/// Source of "now" in milliseconds since the Unix epoch.
pub trait Clock
where
	Self: Send + Sync,
{
	fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_ms(&self) -> i64 {
		(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
	}
}
