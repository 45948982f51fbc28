use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock in Unix milliseconds. A clock set before the epoch reads 0.
pub(crate) fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
