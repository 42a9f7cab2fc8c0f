//! Windows FILETIME conversion.
//!
//! EK60 datagram headers store time as a 64-bit FILETIME (100-nanosecond
//! ticks since 1601-01-01 UTC) written as two little-endian 32-bit words,
//! low word first. The words are combined numerically, not byte-swapped into
//! a single 64-bit read.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Seconds between 1601-01-01 and the Unix epoch.
pub const EPOCH_DELTA_SECONDS: i64 = 11_644_473_600;

/// Convert a split FILETIME into Unix-epoch seconds.
///
/// The float expression matches the reference decoder exactly
/// (`(high * 2^32 + low) * 1e-7 - 11644473600`), so decoded timestamps are
/// bit-compatible with existing tooling.
///
/// # Examples
/// ```
/// let seconds = ekraw_core::filetime::unix_seconds(0, 0);
/// assert_eq!(seconds, -11_644_473_600.0);
/// ```
pub fn unix_seconds(low: u32, high: u32) -> f64 {
    (high as f64 * 4_294_967_296.0 + low as f64) * 1e-7 - EPOCH_DELTA_SECONDS as f64
}

/// RFC 3339 display text for a split FILETIME, computed over exact integer
/// ticks so the text carries no float round-off. Returns `None` when the
/// tick count falls outside the representable calendar range.
pub fn display_string(low: u32, high: u32) -> Option<String> {
    let ticks = ((high as u64) << 32) | low as u64;
    let nanos = ticks as i128 * 100 - EPOCH_DELTA_SECONDS as i128 * 1_000_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}

/// RFC 3339 display text for a Unix-epoch seconds value. Display only; the
/// float is rounded to whole nanoseconds first.
pub fn seconds_to_rfc3339(seconds: f64) -> Option<String> {
    let nanos = (seconds * 1_000_000_000.0).round() as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}

#[cfg(test)]
mod tests {
    use super::{display_string, seconds_to_rfc3339, unix_seconds};

    #[test]
    fn zero_ticks_is_1601() {
        assert_eq!(unix_seconds(0, 0), -11_644_473_600.0);
        assert_eq!(display_string(0, 0).unwrap(), "1601-01-01T00:00:00Z");
    }

    #[test]
    fn pinned_capture_timestamp() {
        // 2012-07-12T00:00:00Z: ticks = (1342051200 + 11644473600) * 1e7.
        let ticks: u64 = 129_865_248_000_000_000;
        let low = (ticks & 0xFFFF_FFFF) as u32;
        let high = (ticks >> 32) as u32;
        let seconds = unix_seconds(low, high);
        assert!((seconds - 1_342_051_200.0).abs() < 1e-3);
        assert_eq!(display_string(low, high).unwrap(), "2012-07-12T00:00:00Z");
    }

    #[test]
    fn defining_relation_holds_over_word_pairs() {
        // Deterministic pseudo-random sweep over (low, high) pairs.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..1000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let low = (state & 0xFFFF_FFFF) as u32;
            let high = (state >> 32) as u32;
            let expected = (high as f64 * 4_294_967_296.0 + low as f64) * 1e-7 - 11_644_473_600.0;
            assert_eq!(unix_seconds(low, high), expected);
        }
    }

    #[test]
    fn words_combine_numerically_not_swapped() {
        // One high-word tick is 2^32 ticks, i.e. 429.4967296 seconds.
        let delta = unix_seconds(0, 1) - unix_seconds(0, 0);
        assert!((delta - 429.4967296).abs() < 1e-6);
        let delta = unix_seconds(1, 0) - unix_seconds(0, 0);
        assert!((delta - 1e-7).abs() < 1e-12);
    }

    #[test]
    fn seconds_display_is_rfc3339() {
        assert_eq!(
            seconds_to_rfc3339(1_342_051_200.0).unwrap(),
            "2012-07-12T00:00:00Z"
        );
        assert_eq!(
            seconds_to_rfc3339(1.5).unwrap(),
            "1970-01-01T00:00:01.5Z"
        );
    }
}
