use std::fs;
use std::path::{Path, PathBuf};

const CON0_TAG: &[u8; 4] = b"CON0";
const RAW0_TAG: &[u8; 4] = b"RAW0";
const NME0_TAG: &[u8; 4] = b"NME0";

const TIME_LOW_RANGE: std::ops::Range<usize> = 4..8;
const TIME_HIGH_RANGE: std::ops::Range<usize> = 8..12;

const CON0_SURVEY_NAME_RANGE: std::ops::Range<usize> = 12..140;
const CON0_TRANSECT_NAME_RANGE: std::ops::Range<usize> = 140..268;
const CON0_SOUNDER_NAME_RANGE: std::ops::Range<usize> = 268..396;
const CON0_VERSION_RANGE: std::ops::Range<usize> = 396..524;
const CON0_TRANSCEIVER_COUNT_RANGE: std::ops::Range<usize> = 524..528;
const CON0_FIXED_LEN: usize = 528;
const CON0_TRANSCEIVER_LEN: usize = 320;
const CON0_CHANNEL_ID_RANGE: std::ops::Range<usize> = 0..128;
const CON0_BEAM_TYPE_RANGE: std::ops::Range<usize> = 128..132;
const CON0_FREQUENCY_RANGE: std::ops::Range<usize> = 132..136;
const CON0_GAIN_RANGE: std::ops::Range<usize> = 136..140;

const RAW0_CHANNEL_RANGE: std::ops::Range<usize> = 12..14;
const RAW0_MODE_RANGE: std::ops::Range<usize> = 14..16;
const RAW0_FREQUENCY_RANGE: std::ops::Range<usize> = 20..24;
const RAW0_SOUND_VELOCITY_RANGE: std::ops::Range<usize> = 40..44;
const RAW0_COUNT_RANGE: std::ops::Range<usize> = 80..84;
const RAW0_SAMPLE_DATA_OFFSET: usize = 84;
const RAW0_MODE_POWER: i16 = 0x1;
const RAW0_MODE_ANGLE: i16 = 0x2;

// 2012-07-12T00:00:00Z as FILETIME ticks; each fixture timestamp is an
// offset from this base in 100-nanosecond units.
const BASE_TICKS: u64 = 129_865_248_000_000_000;

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");
    write_single_fixture(&root)?;
    write_survey_fixture(&root)?;
    Ok(())
}

struct TransceiverSpec {
    channel_id: &'static str,
    beam_type: i32,
    frequency: f32,
    gain: f32,
}

struct PingSpec {
    ticks: u64,
    channel: i16,
    mode: i16,
    frequency: f32,
    power: Vec<i16>,
    angle: Vec<(i8, i8)>,
}

/// A single configuration datagram with one transceiver and no trailing
/// length repeat, the minimal file older writers produce.
fn write_single_fixture(root: &Path) -> Result<(), String> {
    let body = build_configuration_body(
        BASE_TICKS,
        &[TransceiverSpec {
            channel_id: "GPT 38 kHz 009072033fa2 1 ES38B",
            beam_type: 1,
            frequency: 38000.0,
            gain: 25.5,
        }],
    );
    let mut output = Vec::new();
    output.extend_from_slice(&frame(&body, false));
    write_fixture(root.join("single").join("input.raw"), &output)
}

/// A two-channel survey file: configuration, four pings across two
/// channels, an NMEA sentence, and one unrecognized datagram, all with
/// trailing length repeats.
fn write_survey_fixture(root: &Path) -> Result<(), String> {
    let config = build_configuration_body(
        BASE_TICKS,
        &[
            TransceiverSpec {
                channel_id: "GPT 38 kHz 009072033fa2 1 ES38B",
                beam_type: 1,
                frequency: 38000.0,
                gain: 25.5,
            },
            TransceiverSpec {
                channel_id: "GPT 120 kHz 009072033fa3 2 ES120-7C",
                beam_type: 1,
                frequency: 120000.0,
                gain: 27.0,
            },
        ],
    );

    let pings = [
        PingSpec {
            ticks: BASE_TICKS + 10_000_000,
            channel: 1,
            mode: RAW0_MODE_POWER | RAW0_MODE_ANGLE,
            frequency: 38000.0,
            power: vec![-12800, -6400, -3200, -1600],
            angle: vec![(-5, 7), (0, 0), (3, -2), (1, 1)],
        },
        PingSpec {
            ticks: BASE_TICKS + 15_000_000,
            channel: 2,
            mode: RAW0_MODE_POWER,
            frequency: 120000.0,
            power: vec![-100, -200, -300],
            angle: vec![],
        },
        PingSpec {
            ticks: BASE_TICKS + 20_000_000,
            channel: 1,
            mode: RAW0_MODE_POWER | RAW0_MODE_ANGLE,
            frequency: 38000.0,
            power: vec![-12700, -6300, -3100, -1500],
            angle: vec![(2, 2), (0, 1), (-1, 0), (4, -4)],
        },
        PingSpec {
            ticks: BASE_TICKS + 25_000_000,
            channel: 2,
            mode: RAW0_MODE_POWER,
            frequency: 120000.0,
            power: vec![-500, -400, -300, -200, -100],
            angle: vec![],
        },
    ];

    let nmea = build_nmea_body(
        BASE_TICKS + 30_000_000,
        "$GPGLL,5057.970,N,00146.110,E,142451,A*27",
    );
    let mut unknown = Vec::new();
    unknown.extend_from_slice(b"XYZ0");
    unknown.extend_from_slice(&[0u8; 8]);

    let mut output = Vec::new();
    output.extend_from_slice(&frame(&config, true));
    output.extend_from_slice(&frame(&build_sample_body(&pings[0]), true));
    output.extend_from_slice(&frame(&build_sample_body(&pings[1]), true));
    output.extend_from_slice(&frame(&nmea, true));
    output.extend_from_slice(&frame(&build_sample_body(&pings[2]), true));
    output.extend_from_slice(&frame(&unknown, true));
    output.extend_from_slice(&frame(&build_sample_body(&pings[3]), true));
    write_fixture(root.join("survey").join("input.raw"), &output)
}

fn frame(body: &[u8], trailing: bool) -> Vec<u8> {
    let length = body.len() as i32;
    let mut framed = Vec::with_capacity(body.len() + 8);
    framed.extend_from_slice(&length.to_le_bytes());
    framed.extend_from_slice(body);
    if trailing {
        framed.extend_from_slice(&length.to_le_bytes());
    }
    framed
}

fn put_time(body: &mut [u8], ticks: u64) {
    body[TIME_LOW_RANGE].copy_from_slice(&((ticks & 0xFFFF_FFFF) as u32).to_le_bytes());
    body[TIME_HIGH_RANGE].copy_from_slice(&((ticks >> 32) as u32).to_le_bytes());
}

fn put_str(body: &mut [u8], range: std::ops::Range<usize>, text: &str) {
    body[range][..text.len()].copy_from_slice(text.as_bytes());
}

fn build_configuration_body(ticks: u64, transceivers: &[TransceiverSpec]) -> Vec<u8> {
    let mut body = vec![0u8; CON0_FIXED_LEN + transceivers.len() * CON0_TRANSCEIVER_LEN];
    body[..4].copy_from_slice(CON0_TAG);
    put_time(&mut body, ticks);
    put_str(&mut body, CON0_SURVEY_NAME_RANGE, "Survey-1");
    put_str(&mut body, CON0_TRANSECT_NAME_RANGE, "T-01");
    put_str(&mut body, CON0_SOUNDER_NAME_RANGE, "EK60");
    put_str(&mut body, CON0_VERSION_RANGE, "2.2.0");
    body[CON0_TRANSCEIVER_COUNT_RANGE]
        .copy_from_slice(&(transceivers.len() as i32).to_le_bytes());

    for (index, spec) in transceivers.iter().enumerate() {
        let start = CON0_FIXED_LEN + index * CON0_TRANSCEIVER_LEN;
        let record = &mut body[start..start + CON0_TRANSCEIVER_LEN];
        put_str(record, CON0_CHANNEL_ID_RANGE, spec.channel_id);
        record[CON0_BEAM_TYPE_RANGE].copy_from_slice(&spec.beam_type.to_le_bytes());
        record[CON0_FREQUENCY_RANGE].copy_from_slice(&spec.frequency.to_le_bytes());
        record[CON0_GAIN_RANGE].copy_from_slice(&spec.gain.to_le_bytes());
    }
    body
}

fn build_sample_body(spec: &PingSpec) -> Vec<u8> {
    let count = spec.power.len().max(spec.angle.len());
    let mut len = RAW0_SAMPLE_DATA_OFFSET;
    if spec.mode & RAW0_MODE_POWER != 0 {
        len += count * 2;
    }
    if spec.mode & RAW0_MODE_ANGLE != 0 {
        len += count * 2;
    }
    let mut body = vec![0u8; len];
    body[..4].copy_from_slice(RAW0_TAG);
    put_time(&mut body, spec.ticks);
    body[RAW0_CHANNEL_RANGE].copy_from_slice(&spec.channel.to_le_bytes());
    body[RAW0_MODE_RANGE].copy_from_slice(&spec.mode.to_le_bytes());
    body[RAW0_FREQUENCY_RANGE].copy_from_slice(&spec.frequency.to_le_bytes());
    body[RAW0_SOUND_VELOCITY_RANGE].copy_from_slice(&1500.0f32.to_le_bytes());
    body[RAW0_COUNT_RANGE].copy_from_slice(&(count as i32).to_le_bytes());

    let mut at = RAW0_SAMPLE_DATA_OFFSET;
    if spec.mode & RAW0_MODE_POWER != 0 {
        for value in &spec.power {
            body[at..at + 2].copy_from_slice(&value.to_le_bytes());
            at += 2;
        }
    }
    if spec.mode & RAW0_MODE_ANGLE != 0 {
        for (athwartship, alongship) in &spec.angle {
            body[at] = *athwartship as u8;
            body[at + 1] = *alongship as u8;
            at += 2;
        }
    }
    body
}

fn build_nmea_body(ticks: u64, sentence: &str) -> Vec<u8> {
    let mut body = vec![0u8; 12];
    body[..4].copy_from_slice(NME0_TAG);
    put_time(&mut body, ticks);
    body.extend_from_slice(sentence.as_bytes());
    body
}

fn write_fixture(path: PathBuf, data: &[u8]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }
    fs::write(&path, data)
        .map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
    Ok(())
}
