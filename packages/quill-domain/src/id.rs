use std::sync::atomic::{AtomicU64, Ordering};

use rand::{
	RngCore, SeedableRng, TryRngCore,
	rngs::{OsRng, SmallRng},
};
use uuid::Builder;

static FALLBACK_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Fresh note id: a v4 UUID from the OS generator, or the clock-based fallback when the OS
/// generator is unavailable.
pub fn new_note_id(now_ms: i64) -> String {
	let mut bytes = [0_u8; 16];

	match OsRng.try_fill_bytes(&mut bytes) {
		Ok(()) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
		Err(_) => fallback_note_id(now_ms),
	}
}

/// Millisecond timestamp in the leading bits, pseudo-random bits in the rest.
pub fn fallback_note_id(now_ms: i64) -> String {
	let sequence = FALLBACK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
	let seed = (now_ms as u64)
		^ u64::from(std::process::id()).rotate_left(32)
		^ sequence.wrapping_mul(0x9E37_79B9_7F4A_7C15);
	let mut rng = SmallRng::seed_from_u64(seed);
	let mut tail = [0_u8; 10];

	rng.fill_bytes(&mut tail);

	Builder::from_unix_timestamp_millis(now_ms.max(0) as u64, &tail).into_uuid().to_string()
}
