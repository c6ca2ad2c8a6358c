use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_time_in_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or_default()
}
