use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::datagrams::DatagramType;
use crate::datagrams::config::{ConfigError, ConfigurationDatagram, parse_configuration};
use crate::datagrams::filetime;
use crate::datagrams::sample::{SampleError, parse_sample};
use crate::source::{DatagramSource, RawFileSource, SourceError};
use crate::{
    ChannelSummary, DEFAULT_GENERATED_AT, DatagramCounts, HeaderInfo, RawSummary,
    TransceiverInfo, make_stub_summary,
};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("configuration decode error: {0}")]
    Config(#[from] ConfigError),
    #[error("sample decode error: {0}")]
    Sample(#[from] SampleError),
    #[error("file contains no datagrams")]
    Empty,
    #[error("first datagram is {found}, expected CON0")]
    NotConfiguration { found: String },
}

/// Decode the configuration datagram at the head of a raw file.
///
/// The configuration datagram is required to be the first datagram; no
/// scanning is attempted. The decoded value is fully owned by the caller
/// and keeps no reference to the file.
pub fn read_file_header(path: &Path) -> Result<ConfigurationDatagram, InspectError> {
    let mut source = RawFileSource::open(path)?;
    read_leading_configuration(&mut source)
}

/// Decode a whole raw file into a deterministic summary: header fields,
/// datagram counts by type, and per-channel ping statistics.
pub fn inspect_raw_file(path: &Path) -> Result<RawSummary, InspectError> {
    let mut source = RawFileSource::open(path)?;
    let config = read_leading_configuration(&mut source)?;

    let mut counts = DatagramCounts {
        total: 1,
        configuration: 1,
        sample: 0,
        nmea: 0,
        annotation: 0,
        unknown: 0,
    };
    let mut channels: BTreeMap<i16, ChannelAccum> = BTreeMap::new();
    let mut first_ts = None;
    let mut last_ts = None;

    while let Some(event) = source.next_datagram()? {
        counts.total += 1;
        match DatagramType::of(&event.body) {
            Some(DatagramType::Sample) => {
                let Some(ping) = parse_sample(&event.body)? else {
                    continue;
                };
                counts.sample += 1;
                update_ts_bounds(&mut first_ts, &mut last_ts, ping.header.timestamp);
                let accum = channels.entry(ping.channel).or_default();
                accum.pings += 1;
                accum.samples_total += ping.count.max(0) as u64;
                accum.frequency.get_or_insert(ping.frequency as f64);
            }
            Some(DatagramType::Nmea) => counts.nmea += 1,
            Some(DatagramType::Annotation) => counts.annotation += 1,
            // A repeated configuration datagram is counted but not re-decoded.
            Some(DatagramType::Configuration) => counts.configuration += 1,
            _ => counts.unknown += 1,
        }
    }

    let mut summary = make_stub_summary(&path.display().to_string(), path.metadata()?.len());
    summary.header = Some(header_info(&config));
    summary.datagrams = counts;
    summary.time_start = first_ts.and_then(filetime::seconds_to_rfc3339);
    summary.time_end = last_ts.and_then(filetime::seconds_to_rfc3339);
    summary.generated_at = summary
        .time_end
        .clone()
        .or_else(|| summary.time_start.clone())
        .or_else(|| {
            let text = &config.header.timestamp_text;
            (!text.is_empty()).then(|| text.clone())
        })
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    summary.channels = channels
        .into_iter()
        .map(|(channel, accum)| ChannelSummary {
            channel,
            pings: accum.pings,
            samples_total: accum.samples_total,
            frequency: accum.frequency,
        })
        .collect();
    Ok(summary)
}

fn read_leading_configuration(
    source: &mut RawFileSource,
) -> Result<ConfigurationDatagram, InspectError> {
    let event = source.next_datagram()?.ok_or(InspectError::Empty)?;
    match parse_configuration(&event.body)? {
        Some(config) => Ok(config),
        None => Err(InspectError::NotConfiguration {
            found: DatagramType::of(&event.body)
                .map(|t| t.to_string())
                .unwrap_or_else(|| "<short body>".to_string()),
        }),
    }
}

fn header_info(config: &ConfigurationDatagram) -> HeaderInfo {
    HeaderInfo {
        datagram_type: config.header.datagram_type.to_string(),
        timestamp: config.header.timestamp,
        timestamp_text: config.header.timestamp_text.clone(),
        survey_name: config.survey_name.clone(),
        transect_name: config.transect_name.clone(),
        sounder_name: config.sounder_name.clone(),
        software_version: config.software_version.clone(),
        transceiver_count: config.transceiver_count,
        header_length: config.header_length,
        transceivers: config
            .transceivers
            .iter()
            .map(|t| TransceiverInfo {
                channel_id: t.channel_id.clone(),
                beam_type: t.beam_type,
                frequency: t.frequency as f64,
                gain: t.gain as f64,
            })
            .collect(),
    }
}

#[derive(Default)]
struct ChannelAccum {
    pings: u64,
    samples_total: u64,
    frequency: Option<f64>,
}

fn update_ts_bounds(first: &mut Option<f64>, last: &mut Option<f64>, ts: f64) {
    match first {
        None => *first = Some(ts),
        Some(existing) => {
            if ts < *existing {
                *first = Some(ts);
            }
        }
    }
    match last {
        None => *last = Some(ts),
        Some(existing) => {
            if ts > *existing {
                *last = Some(ts);
            }
        }
    }
}
