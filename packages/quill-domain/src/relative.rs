const MINUTE_MS: i64 = 60 * 1_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Short "time since" label for a timestamp, e.g. `5m ago`.
pub fn time_ago(now_ms: i64, ts_ms: i64) -> String {
	let diff = now_ms.saturating_sub(ts_ms);

	if diff < MINUTE_MS {
		return "just now".to_string();
	}
	if diff < HOUR_MS {
		return format!("{}m ago", diff / MINUTE_MS);
	}
	if diff < DAY_MS {
		return format!("{}h ago", diff / HOUR_MS);
	}

	format!("{}d ago", diff / DAY_MS)
}
