//! ekraw core library for decoding SIMRAD EK60 "raw" echo sounder files.
//!
//! A raw file is a sequence of length-framed, typed datagrams: a
//! configuration datagram ("CON0") carrying survey metadata and
//! per-transceiver hardware settings, followed by per-channel sample
//! datagrams ("RAW0") and auxiliary records. This crate implements the
//! framing and decoding layers: `source` isolates file I/O and frame
//! delimiting, the `datagrams` modules decode complete bodies
//! (layout/reader/parser), and `inspect` drives a whole-file walk into a
//! deterministic summary.
//!
//! Invariants:
//! - Parsers are pure and byte-oriented; all I/O lives in `source`.
//! - No partial records: a malformed datagram fails the decode with an
//!   actionable error instead of returning a best-effort value.
//! - Summary outputs are deterministic and stable across runs.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use ekraw_core::read_file_header;
//!
//! let config = read_file_header(Path::new("survey.raw"))?;
//! println!("{} transceivers", config.transceiver_count);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod datagrams;
mod inspect;
mod source;

pub use datagrams::config::{
    ConfigError, ConfigurationDatagram, TransceiverConfig, parse_configuration,
};
pub use datagrams::filetime;
pub use datagrams::sample::{AngleSample, SampleDatagram, SampleError, parse_sample, power_to_db};
pub use datagrams::{DatagramHeader, DatagramType};
pub use inspect::{InspectError, inspect_raw_file, read_file_header};
pub use source::{DatagramEvent, DatagramSource, RawFileSource, SourceError, open_sample_stream};

/// Current summary schema version.
pub const SUMMARY_VERSION: u32 = 1;
/// Default timestamp used when a file carries no usable capture time.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Whole-file summary with deterministic ordering.
///
/// # Examples
/// ```
/// use ekraw_core::make_stub_summary;
///
/// let summary = make_stub_summary("survey.raw", 852);
/// assert_eq!(summary.summary_version, ekraw_core::SUMMARY_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSummary {
    /// Summary schema version (not the file format version).
    pub summary_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp; derived from capture time so output is stable.
    pub generated_at: String,
    /// Input file metadata.
    pub input: InputInfo,
    /// Configuration header fields (absent only in stub summaries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderInfo>,
    /// Datagram counts by type tag.
    pub datagrams: DatagramCounts,
    /// RFC3339 timestamp of the first sample datagram, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// RFC3339 timestamp of the last sample datagram, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    /// Per-channel ping statistics in channel order.
    pub channels: Vec<ChannelSummary>,
}

/// Tool metadata embedded in summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input file metadata embedded in summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the inspector.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Fields of the configuration datagram surfaced for display, the set the
/// original viewer consumed: type tag, timestamp, names, transceiver count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// 4-character datagram type tag ("CON0").
    pub datagram_type: String,
    /// Unix-epoch seconds with sub-second precision.
    pub timestamp: f64,
    /// RFC3339 display text for the timestamp.
    pub timestamp_text: String,
    pub survey_name: String,
    pub transect_name: String,
    pub sounder_name: String,
    pub software_version: String,
    pub transceiver_count: i32,
    /// Datagram length declared by the file (848 for one transceiver).
    pub header_length: i32,
    /// One entry per transceiver, in file order.
    pub transceivers: Vec<TransceiverInfo>,
}

/// Per-transceiver display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransceiverInfo {
    pub channel_id: String,
    pub beam_type: i32,
    pub frequency: f64,
    pub gain: f64,
}

/// Datagram counts by type tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatagramCounts {
    pub total: u64,
    pub configuration: u64,
    pub sample: u64,
    pub nmea: u64,
    pub annotation: u64,
    pub unknown: u64,
}

/// Ping statistics for one channel.
///
/// # Examples
/// ```
/// use ekraw_core::ChannelSummary;
///
/// let channel = ChannelSummary {
///     channel: 1,
///     pings: 120,
///     samples_total: 120_000,
///     frequency: Some(38000.0),
/// };
/// assert_eq!(channel.pings, 120);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Channel number as recorded in the sample datagrams.
    pub channel: i16,
    /// Number of sample datagrams observed for this channel.
    pub pings: u64,
    /// Sum of per-ping sample counts.
    pub samples_total: u64,
    /// Operating frequency in Hz, from the first ping seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

/// Build a stub summary with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use ekraw_core::make_stub_summary;
///
/// let summary = make_stub_summary("survey.raw", 852);
/// assert!(summary.header.is_none());
/// assert!(summary.channels.is_empty());
/// ```
pub fn make_stub_summary(input_path: &str, input_bytes: u64) -> RawSummary {
    RawSummary {
        summary_version: SUMMARY_VERSION,
        tool: ToolInfo {
            name: "ekraw".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        header: None,
        datagrams: DatagramCounts::default(),
        time_start: None,
        time_end: None,
        channels: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_omits_optional_fields_when_none() {
        let summary = make_stub_summary("survey.raw", 1);
        let value = serde_json::to_value(&summary).expect("summary json");
        assert!(value.get("header").is_none());
        assert!(value.get("time_start").is_none());
        assert!(value.get("time_end").is_none());
        assert_eq!(value["datagrams"]["total"], 0);
    }

    #[test]
    fn channel_summary_omits_missing_frequency() {
        let channel = ChannelSummary {
            channel: 2,
            pings: 1,
            samples_total: 10,
            frequency: None,
        };
        let value = serde_json::to_value(&channel).expect("channel json");
        assert!(value.get("frequency").is_none());
    }
}
