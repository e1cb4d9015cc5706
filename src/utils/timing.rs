//! Wall-clock timing and human-scaled duration formatting

use std::time::Instant;

/// Measures the wall-clock time of one operation
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start measuring now
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`Stopwatch::start`]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Format a duration given in milliseconds
///
/// `742ms` below one second, `12.3s` below one minute, `2m7s` from there on.
/// Minutes and seconds are both truncated.
pub fn format_elapsed(ms: u64) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let total_secs = ms / 1000;
        format!("{}m{}s", total_secs / 60, total_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_milliseconds() {
        assert_eq!(format_elapsed(0), "0ms");
        assert_eq!(format_elapsed(742), "742ms");
        assert_eq!(format_elapsed(999), "999ms");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_elapsed(1_000), "1.0s");
        assert_eq!(format_elapsed(12_345), "12.3s");
        assert_eq!(format_elapsed(59_900), "59.9s");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_elapsed(60_000), "1m0s");
        assert_eq!(format_elapsed(125_000), "2m5s");
        assert_eq!(format_elapsed(127_999), "2m7s");
        assert_eq!(format_elapsed(3_600_000), "60m0s");
    }

    #[test]
    fn test_stopwatch_is_monotonic() {
        let watch = Stopwatch::start();
        let first = watch.elapsed_ms();
        let second = watch.elapsed_ms();
        assert!(second >= first);
    }
}
