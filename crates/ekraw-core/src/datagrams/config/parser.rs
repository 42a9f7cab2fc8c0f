use super::error::ConfigError;
use super::layout;
use super::reader::ConfigReader;
use crate::datagrams::{DatagramHeader, DatagramType};

/// One transceiver's hardware configuration, a fixed 320-byte record.
/// Decoded once per file and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct TransceiverConfig {
    pub channel_id: String,
    pub beam_type: i32,
    pub frequency: f32,
    pub gain: f32,
    pub equivalent_beam_angle: f32,
    pub beamwidth_alongship: f32,
    pub beamwidth_athwartship: f32,
    pub angle_sensitivity_alongship: f32,
    pub angle_sensitivity_athwartship: f32,
    pub angle_offset_alongship: f32,
    pub angle_offset_athwartship: f32,
    pub pos_x: f32,
    pub pos_y: f32,
    pub pos_z: f32,
    pub dir_x: f32,
    pub dir_y: f32,
    pub dir_z: f32,
    pub pulse_length_table: [f32; layout::TABLE_ENTRIES],
    pub gain_table: [f32; layout::TABLE_ENTRIES],
    pub sa_correction_table: [f32; layout::TABLE_ENTRIES],
    /// Reserved ranges, retained opaquely.
    pub spare2: [u8; 8],
    pub spare3: [u8; 8],
    pub spare4: [u8; 52],
}

/// Decoded "CON0" datagram: survey metadata plus the per-transceiver
/// configuration records, densely indexed from 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationDatagram {
    pub header: DatagramHeader,
    pub survey_name: String,
    pub transect_name: String,
    pub sounder_name: String,
    pub software_version: String,
    pub transceiver_count: i32,
    pub transceivers: Vec<TransceiverConfig>,
    /// The datagram length declared by the file's leading length field
    /// (848 for a single-transceiver file).
    pub header_length: i32,
}

/// Decode a configuration datagram body (length prefix already stripped).
///
/// Returns `Ok(None)` when the type tag is not "CON0". Validation order
/// matters: the transceiver count is bounded before any record is read, and
/// the declared length must match the span of the field layout exactly, so a
/// malformed file fails with a diagnostic instead of a partial decode.
pub fn parse_configuration(
    body: &[u8],
) -> Result<Option<ConfigurationDatagram>, ConfigError> {
    let reader = ConfigReader::new(body);

    let tag: [u8; 4] = reader.read_array(layout::TYPE_TAG_RANGE)?;
    if &tag != layout::CON0_TAG {
        return Ok(None);
    }
    reader.require_len(layout::FIXED_LEN)?;

    let time_low = reader.read_u32_le(layout::TIME_LOW_RANGE)?;
    let time_high = reader.read_u32_le(layout::TIME_HIGH_RANGE)?;

    let survey_name = reader.read_fixed_string(layout::SURVEY_NAME_RANGE)?;
    let transect_name = reader.read_fixed_string(layout::TRANSECT_NAME_RANGE)?;
    let sounder_name = reader.read_fixed_string(layout::SOUNDER_NAME_RANGE)?;
    let software_version = reader.read_string_stripping_nuls(layout::VERSION_RANGE)?;

    let transceiver_count = reader.read_i32_le(layout::TRANSCEIVER_COUNT_RANGE)?;
    if !(0..=layout::MAX_TRANSCEIVERS).contains(&transceiver_count) {
        return Err(ConfigError::InvalidTransceiverCount {
            count: transceiver_count,
        });
    }

    let expected = layout::FIXED_LEN + transceiver_count as usize * layout::TRANSCEIVER_LEN;
    if body.len() != expected {
        return Err(ConfigError::LengthMismatch {
            declared: body.len(),
            expected,
        });
    }

    let mut transceivers = Vec::with_capacity(transceiver_count as usize);
    for index in 0..transceiver_count as usize {
        let start = layout::FIXED_LEN + index * layout::TRANSCEIVER_LEN;
        let record = reader.read_slice(start..start + layout::TRANSCEIVER_LEN)?;
        transceivers.push(parse_transceiver(record)?);
    }

    Ok(Some(ConfigurationDatagram {
        header: DatagramHeader::from_words(DatagramType::Configuration, time_low, time_high),
        survey_name,
        transect_name,
        sounder_name,
        software_version,
        transceiver_count,
        transceivers,
        header_length: body.len() as i32,
    }))
}

fn parse_transceiver(record: &[u8]) -> Result<TransceiverConfig, ConfigError> {
    let reader = ConfigReader::new(record);
    Ok(TransceiverConfig {
        channel_id: reader.read_fixed_string(layout::CHANNEL_ID_RANGE)?,
        beam_type: reader.read_i32_le(layout::BEAM_TYPE_RANGE)?,
        frequency: reader.read_f32_le(layout::FREQUENCY_RANGE)?,
        gain: reader.read_f32_le(layout::GAIN_RANGE)?,
        equivalent_beam_angle: reader.read_f32_le(layout::EQUIVALENT_BEAM_ANGLE_RANGE)?,
        beamwidth_alongship: reader.read_f32_le(layout::BEAMWIDTH_ALONGSHIP_RANGE)?,
        beamwidth_athwartship: reader.read_f32_le(layout::BEAMWIDTH_ATHWARTSHIP_RANGE)?,
        angle_sensitivity_alongship: reader
            .read_f32_le(layout::ANGLE_SENSITIVITY_ALONGSHIP_RANGE)?,
        angle_sensitivity_athwartship: reader
            .read_f32_le(layout::ANGLE_SENSITIVITY_ATHWARTSHIP_RANGE)?,
        angle_offset_alongship: reader.read_f32_le(layout::ANGLE_OFFSET_ALONGSHIP_RANGE)?,
        angle_offset_athwartship: reader.read_f32_le(layout::ANGLE_OFFSET_ATHWARTSHIP_RANGE)?,
        pos_x: reader.read_f32_le(layout::POS_X_RANGE)?,
        pos_y: reader.read_f32_le(layout::POS_Y_RANGE)?,
        pos_z: reader.read_f32_le(layout::POS_Z_RANGE)?,
        dir_x: reader.read_f32_le(layout::DIR_X_RANGE)?,
        dir_y: reader.read_f32_le(layout::DIR_Y_RANGE)?,
        dir_z: reader.read_f32_le(layout::DIR_Z_RANGE)?,
        pulse_length_table: reader.read_f32_table(layout::PULSE_LENGTH_TABLE_RANGE)?,
        gain_table: reader.read_f32_table(layout::GAIN_TABLE_RANGE)?,
        sa_correction_table: reader.read_f32_table(layout::SA_CORRECTION_TABLE_RANGE)?,
        spare2: reader.read_array(layout::SPARE2_RANGE)?,
        spare3: reader.read_array(layout::SPARE3_RANGE)?,
        spare4: reader.read_array(layout::SPARE4_RANGE)?,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_configuration;
    use crate::datagrams::DatagramType;
    use crate::datagrams::config::error::ConfigError;
    use crate::datagrams::config::layout;

    fn put_str(body: &mut [u8], range: std::ops::Range<usize>, text: &str) {
        body[range][..text.len()].copy_from_slice(text.as_bytes());
    }

    fn build_body(transceiver_count: i32) -> Vec<u8> {
        let records = transceiver_count.max(0) as usize;
        let mut body = vec![0u8; layout::FIXED_LEN + records * layout::TRANSCEIVER_LEN];
        body[layout::TYPE_TAG_RANGE].copy_from_slice(layout::CON0_TAG);
        // 2012-07-12T00:00:00Z as FILETIME ticks.
        let ticks: u64 = 129_865_248_000_000_000;
        body[layout::TIME_LOW_RANGE].copy_from_slice(&(ticks as u32).to_le_bytes());
        body[layout::TIME_HIGH_RANGE].copy_from_slice(&((ticks >> 32) as u32).to_le_bytes());
        put_str(&mut body, layout::SURVEY_NAME_RANGE, "Survey-1");
        put_str(&mut body, layout::TRANSECT_NAME_RANGE, "T-01");
        put_str(&mut body, layout::SOUNDER_NAME_RANGE, "EK60");
        put_str(&mut body, layout::VERSION_RANGE, "2.2.0");
        body[layout::TRANSCEIVER_COUNT_RANGE]
            .copy_from_slice(&transceiver_count.to_le_bytes());

        for index in 0..records {
            let start = layout::FIXED_LEN + index * layout::TRANSCEIVER_LEN;
            let record = &mut body[start..start + layout::TRANSCEIVER_LEN];
            put_str(record, layout::CHANNEL_ID_RANGE, "GPT 38 kHz 009072033fa2 1 ES38B");
            record[layout::BEAM_TYPE_RANGE].copy_from_slice(&1i32.to_le_bytes());
            record[layout::FREQUENCY_RANGE].copy_from_slice(&38000.0f32.to_le_bytes());
            record[layout::GAIN_RANGE].copy_from_slice(&25.5f32.to_le_bytes());
            record[layout::POS_Z_RANGE].copy_from_slice(&1.5f32.to_le_bytes());
            for (slot, value) in [0.000_256f32, 0.000_512, 0.001_024, 0.002_048, 0.004_096]
                .iter()
                .enumerate()
            {
                let at = layout::PULSE_LENGTH_TABLE_RANGE.start + slot * 4;
                record[at..at + 4].copy_from_slice(&value.to_le_bytes());
            }
            record[layout::SPARE2_RANGE][0] = 0xAA;
            record[layout::SPARE4_RANGE][51] = 0xBB;
        }
        body
    }

    #[test]
    fn single_transceiver_body_is_canonical_848_bytes() {
        let body = build_body(1);
        assert_eq!(body.len(), 848);
    }

    #[test]
    fn parse_valid_configuration() {
        let body = build_body(1);
        let config = parse_configuration(&body).unwrap().unwrap();

        assert_eq!(config.header.datagram_type, DatagramType::Configuration);
        assert_eq!(config.header.timestamp_text, "2012-07-12T00:00:00Z");
        assert!((config.header.timestamp - 1_342_051_200.0).abs() < 1e-3);
        assert_eq!(config.survey_name, "Survey-1");
        assert_eq!(config.transect_name, "T-01");
        assert_eq!(config.sounder_name, "EK60");
        assert_eq!(config.software_version, "2.2.0");
        assert_eq!(config.transceiver_count, 1);
        assert_eq!(config.transceivers.len(), 1);
        assert_eq!(config.header_length, 848);

        let transceiver = &config.transceivers[0];
        assert_eq!(transceiver.channel_id, "GPT 38 kHz 009072033fa2 1 ES38B");
        assert_eq!(transceiver.beam_type, 1);
        assert_eq!(transceiver.frequency, 38000.0);
        assert_eq!(transceiver.gain, 25.5);
        assert_eq!(transceiver.pos_z, 1.5);
        assert_eq!(
            transceiver.pulse_length_table,
            [0.000_256, 0.000_512, 0.001_024, 0.002_048, 0.004_096]
        );
        assert_eq!(transceiver.gain_table, [0.0; 5]);
        assert_eq!(transceiver.sa_correction_table, [0.0; 5]);
        assert_eq!(transceiver.spare2[0], 0xAA);
        assert_eq!(transceiver.spare4[51], 0xBB);
    }

    #[test]
    fn zero_transceivers_is_valid() {
        let body = build_body(0);
        let config = parse_configuration(&body).unwrap().unwrap();
        assert_eq!(config.transceiver_count, 0);
        assert!(config.transceivers.is_empty());
        assert_eq!(config.header_length, layout::FIXED_LEN as i32);
    }

    #[test]
    fn version_field_drops_interior_nuls() {
        let mut body = build_body(0);
        body[layout::VERSION_RANGE][..6].copy_from_slice(b"2\x00.2.0");
        let config = parse_configuration(&body).unwrap().unwrap();
        assert_eq!(config.software_version, "2.2.0");
    }

    #[test]
    fn survey_name_keeps_interior_nuls() {
        let mut body = build_body(0);
        body[layout::SURVEY_NAME_RANGE][..4].copy_from_slice(b"AB\x00C");
        let config = parse_configuration(&body).unwrap().unwrap();
        assert_eq!(config.survey_name, "AB\u{0}C");
    }

    #[test]
    fn foreign_tag_is_not_a_configuration() {
        let mut body = build_body(1);
        body[layout::TYPE_TAG_RANGE].copy_from_slice(b"RAW0");
        assert!(parse_configuration(&body).unwrap().is_none());
    }

    #[test]
    fn negative_count_is_rejected() {
        let mut body = build_body(0);
        body[layout::TRANSCEIVER_COUNT_RANGE].copy_from_slice(&(-1i32).to_le_bytes());
        let err = parse_configuration(&body).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTransceiverCount { count: -1 }
        ));
    }

    #[test]
    fn implausible_count_is_rejected() {
        let mut body = build_body(0);
        body[layout::TRANSCEIVER_COUNT_RANGE].copy_from_slice(&1000i32.to_le_bytes());
        let err = parse_configuration(&body).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTransceiverCount { count: 1000 }
        ));
    }

    #[test]
    fn declared_length_must_match_layout_span() {
        let mut body = build_body(1);
        body.truncate(body.len() - 10);
        let err = parse_configuration(&body).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::LengthMismatch {
                declared: 838,
                expected: 848
            }
        ));
    }

    #[test]
    fn short_header_is_truncation() {
        let mut body = build_body(0);
        body.truncate(100);
        let err = parse_configuration(&body).unwrap_err();
        assert!(matches!(err, ConfigError::TooShort { .. }));
    }
}
