pub(crate) const READY_LABEL: &str = "Portfolio Ready";
pub(crate) const ENCODING_LABEL: &str = "UTF-8";
pub(crate) const LINE_ENDING_LABEL: &str = "LF";
pub(crate) const LANGUAGE_LABEL: &str = "TypeScript React";

use chrono::{DateTime, FixedOffset};

pub(crate) const CLOCK_PLACEHOLDER: &str = "--:--:--";
const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Read-only snapshot for the status bar.
#[derive(Debug, Clone)]
pub(crate) struct StatusBarViewModel {
    pub(crate) version: &'static str,
    pub(crate) clock: String,
}

/// Format a wall-clock reading as `HH:MM:SS` in its own offset.
pub(crate) fn format_clock(now: &DateTime<FixedOffset>) -> String {
    now.format(CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, TimeZone};

    use super::format_clock;

    fn at(offset_secs: i32, millis: i64) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_secs)
            .expect("offset should be in range")
            .timestamp_millis_opt(millis)
            .single()
            .expect("timestamp should be unambiguous")
    }

    #[test]
    fn given_utc_offset_when_formatted_then_clock_reads_utc_time() {
        // 2024-01-02T13:05:09.750Z
        assert_eq!(format_clock(&at(0, 1_704_200_709_750)), "13:05:09");
    }

    #[test]
    fn given_local_offset_when_formatted_then_clock_follows_local_time() {
        let kolkata = 5 * 3600 + 30 * 60;
        assert_eq!(
            format_clock(&at(kolkata, 1_704_200_709_750)),
            "18:35:09"
        );
    }
}
