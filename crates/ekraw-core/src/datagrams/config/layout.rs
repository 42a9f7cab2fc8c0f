pub const CON0_TAG: &[u8; 4] = b"CON0";

pub const TYPE_TAG_RANGE: std::ops::Range<usize> = 0..4;
pub const TIME_LOW_RANGE: std::ops::Range<usize> = 4..8;
pub const TIME_HIGH_RANGE: std::ops::Range<usize> = 8..12;

pub const SURVEY_NAME_RANGE: std::ops::Range<usize> = 12..140;
pub const TRANSECT_NAME_RANGE: std::ops::Range<usize> = 140..268;
pub const SOUNDER_NAME_RANGE: std::ops::Range<usize> = 268..396;
pub const VERSION_RANGE: std::ops::Range<usize> = 396..524;
pub const TRANSCEIVER_COUNT_RANGE: std::ops::Range<usize> = 524..528;

/// Body bytes before the transceiver records; also the body length of a
/// zero-transceiver datagram.
pub const FIXED_LEN: usize = 528;
pub const TRANSCEIVER_LEN: usize = 320;
/// Generous bound beyond any known EK60 installation.
pub const MAX_TRANSCEIVERS: i32 = 64;

// Offsets within one 320-byte transceiver record.
pub const CHANNEL_ID_RANGE: std::ops::Range<usize> = 0..128;
pub const BEAM_TYPE_RANGE: std::ops::Range<usize> = 128..132;
pub const FREQUENCY_RANGE: std::ops::Range<usize> = 132..136;
pub const GAIN_RANGE: std::ops::Range<usize> = 136..140;
pub const EQUIVALENT_BEAM_ANGLE_RANGE: std::ops::Range<usize> = 140..144;
pub const BEAMWIDTH_ALONGSHIP_RANGE: std::ops::Range<usize> = 144..148;
pub const BEAMWIDTH_ATHWARTSHIP_RANGE: std::ops::Range<usize> = 148..152;
pub const ANGLE_SENSITIVITY_ALONGSHIP_RANGE: std::ops::Range<usize> = 152..156;
pub const ANGLE_SENSITIVITY_ATHWARTSHIP_RANGE: std::ops::Range<usize> = 156..160;
pub const ANGLE_OFFSET_ALONGSHIP_RANGE: std::ops::Range<usize> = 160..164;
pub const ANGLE_OFFSET_ATHWARTSHIP_RANGE: std::ops::Range<usize> = 164..168;
pub const POS_X_RANGE: std::ops::Range<usize> = 168..172;
pub const POS_Y_RANGE: std::ops::Range<usize> = 172..176;
pub const POS_Z_RANGE: std::ops::Range<usize> = 176..180;
pub const DIR_X_RANGE: std::ops::Range<usize> = 180..184;
pub const DIR_Y_RANGE: std::ops::Range<usize> = 184..188;
pub const DIR_Z_RANGE: std::ops::Range<usize> = 188..192;
pub const PULSE_LENGTH_TABLE_RANGE: std::ops::Range<usize> = 192..212;
pub const SPARE2_RANGE: std::ops::Range<usize> = 212..220;
pub const GAIN_TABLE_RANGE: std::ops::Range<usize> = 220..240;
pub const SPARE3_RANGE: std::ops::Range<usize> = 240..248;
pub const SA_CORRECTION_TABLE_RANGE: std::ops::Range<usize> = 248..268;
pub const SPARE4_RANGE: std::ops::Range<usize> = 268..320;

pub const TABLE_ENTRIES: usize = 5;
