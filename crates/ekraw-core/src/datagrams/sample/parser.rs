use super::error::SampleError;
use super::layout;
use super::reader::SampleReader;
use crate::datagrams::{DatagramHeader, DatagramType};

/// One split-beam angle sample: electrical angles as signed bytes,
/// athwartship in the low byte of the 16-bit word, alongship in the high
/// byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleSample {
    pub athwartship: i8,
    pub alongship: i8,
}

/// Decoded "RAW0" datagram: one ping of one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDatagram {
    pub header: DatagramHeader,
    pub channel: i16,
    /// Bit flags: 0x1 power array present, 0x2 angle array present.
    pub mode: i16,
    pub transducer_depth: f32,
    pub frequency: f32,
    pub transmit_power: f32,
    pub pulse_length: f32,
    pub bandwidth: f32,
    pub sample_interval: f32,
    pub sound_velocity: f32,
    pub absorption_coefficient: f32,
    pub heave: f32,
    pub roll: f32,
    pub pitch: f32,
    pub temperature: f32,
    pub trawl_upper_depth_valid: i16,
    pub trawl_opening_valid: i16,
    pub trawl_upper_depth: f32,
    pub trawl_opening: f32,
    /// First sample index of this ping's range window.
    pub offset: i32,
    pub count: i32,
    /// Raw received power, `count` entries when mode bit 0x1 is set.
    /// Units of `10 * log10(2) / 256` dB; see [`power_to_db`].
    pub power: Vec<i16>,
    /// Split-beam angles, `count` entries when mode bit 0x2 is set.
    pub angle: Vec<AngleSample>,
}

/// Convert a raw power sample to decibels (reference-manual scaling).
pub fn power_to_db(raw: i16) -> f64 {
    raw as f64 * 10.0 * std::f64::consts::LOG10_2 / 256.0
}

/// Decode a sample datagram body (length prefix already stripped).
///
/// Returns `Ok(None)` when the type tag is not "RAW0". The declared body
/// length must equal the fixed part plus exactly the arrays selected by the
/// mode flags; anything else fails without producing a partial record.
pub fn parse_sample(body: &[u8]) -> Result<Option<SampleDatagram>, SampleError> {
    let reader = SampleReader::new(body);

    let tag: [u8; 4] = reader.read_array(layout::TYPE_TAG_RANGE)?;
    if &tag != layout::RAW0_TAG {
        return Ok(None);
    }
    reader.require_len(layout::SAMPLE_DATA_OFFSET)?;

    let time_low = reader.read_u32_le(layout::TIME_LOW_RANGE)?;
    let time_high = reader.read_u32_le(layout::TIME_HIGH_RANGE)?;

    let mode = reader.read_i16_le(layout::MODE_RANGE)?;
    if !(0..=(layout::MODE_POWER | layout::MODE_ANGLE)).contains(&mode) {
        return Err(SampleError::InvalidMode { mode });
    }

    let count = reader.read_i32_le(layout::COUNT_RANGE)?;
    if !(0..=layout::MAX_SAMPLE_COUNT).contains(&count) {
        return Err(SampleError::InvalidSampleCount { count });
    }
    let samples = count as usize;

    let power_len = if mode & layout::MODE_POWER != 0 { samples * 2 } else { 0 };
    let angle_len = if mode & layout::MODE_ANGLE != 0 { samples * 2 } else { 0 };
    let expected = layout::SAMPLE_DATA_OFFSET + power_len + angle_len;
    if body.len() != expected {
        return Err(SampleError::LengthMismatch {
            declared: body.len(),
            expected,
        });
    }

    let power_start = layout::SAMPLE_DATA_OFFSET;
    let power = reader
        .read_slice(power_start..power_start + power_len)?
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let angle_start = power_start + power_len;
    let angle = reader
        .read_slice(angle_start..angle_start + angle_len)?
        .chunks_exact(2)
        .map(|pair| AngleSample {
            athwartship: pair[0] as i8,
            alongship: pair[1] as i8,
        })
        .collect();

    Ok(Some(SampleDatagram {
        header: DatagramHeader::from_words(DatagramType::Sample, time_low, time_high),
        channel: reader.read_i16_le(layout::CHANNEL_RANGE)?,
        mode,
        transducer_depth: reader.read_f32_le(layout::TRANSDUCER_DEPTH_RANGE)?,
        frequency: reader.read_f32_le(layout::FREQUENCY_RANGE)?,
        transmit_power: reader.read_f32_le(layout::TRANSMIT_POWER_RANGE)?,
        pulse_length: reader.read_f32_le(layout::PULSE_LENGTH_RANGE)?,
        bandwidth: reader.read_f32_le(layout::BANDWIDTH_RANGE)?,
        sample_interval: reader.read_f32_le(layout::SAMPLE_INTERVAL_RANGE)?,
        sound_velocity: reader.read_f32_le(layout::SOUND_VELOCITY_RANGE)?,
        absorption_coefficient: reader.read_f32_le(layout::ABSORPTION_COEFFICIENT_RANGE)?,
        heave: reader.read_f32_le(layout::HEAVE_RANGE)?,
        roll: reader.read_f32_le(layout::ROLL_RANGE)?,
        pitch: reader.read_f32_le(layout::PITCH_RANGE)?,
        temperature: reader.read_f32_le(layout::TEMPERATURE_RANGE)?,
        trawl_upper_depth_valid: reader.read_i16_le(layout::TRAWL_UPPER_DEPTH_VALID_RANGE)?,
        trawl_opening_valid: reader.read_i16_le(layout::TRAWL_OPENING_VALID_RANGE)?,
        trawl_upper_depth: reader.read_f32_le(layout::TRAWL_UPPER_DEPTH_RANGE)?,
        trawl_opening: reader.read_f32_le(layout::TRAWL_OPENING_RANGE)?,
        offset: reader.read_i32_le(layout::OFFSET_RANGE)?,
        count,
        power,
        angle,
    }))
}
