pub const RAW0_TAG: &[u8; 4] = b"RAW0";

pub const TYPE_TAG_RANGE: std::ops::Range<usize> = 0..4;
pub const TIME_LOW_RANGE: std::ops::Range<usize> = 4..8;
pub const TIME_HIGH_RANGE: std::ops::Range<usize> = 8..12;

pub const CHANNEL_RANGE: std::ops::Range<usize> = 12..14;
pub const MODE_RANGE: std::ops::Range<usize> = 14..16;
pub const TRANSDUCER_DEPTH_RANGE: std::ops::Range<usize> = 16..20;
pub const FREQUENCY_RANGE: std::ops::Range<usize> = 20..24;
pub const TRANSMIT_POWER_RANGE: std::ops::Range<usize> = 24..28;
pub const PULSE_LENGTH_RANGE: std::ops::Range<usize> = 28..32;
pub const BANDWIDTH_RANGE: std::ops::Range<usize> = 32..36;
pub const SAMPLE_INTERVAL_RANGE: std::ops::Range<usize> = 36..40;
pub const SOUND_VELOCITY_RANGE: std::ops::Range<usize> = 40..44;
pub const ABSORPTION_COEFFICIENT_RANGE: std::ops::Range<usize> = 44..48;
pub const HEAVE_RANGE: std::ops::Range<usize> = 48..52;
pub const ROLL_RANGE: std::ops::Range<usize> = 52..56;
pub const PITCH_RANGE: std::ops::Range<usize> = 56..60;
pub const TEMPERATURE_RANGE: std::ops::Range<usize> = 60..64;
pub const TRAWL_UPPER_DEPTH_VALID_RANGE: std::ops::Range<usize> = 64..66;
pub const TRAWL_OPENING_VALID_RANGE: std::ops::Range<usize> = 66..68;
pub const TRAWL_UPPER_DEPTH_RANGE: std::ops::Range<usize> = 68..72;
pub const TRAWL_OPENING_RANGE: std::ops::Range<usize> = 72..76;
pub const OFFSET_RANGE: std::ops::Range<usize> = 76..80;
pub const COUNT_RANGE: std::ops::Range<usize> = 80..84;

/// Body bytes before the sample arrays.
pub const SAMPLE_DATA_OFFSET: usize = 84;

/// Mode bit flags selecting which sample arrays are present.
pub const MODE_POWER: i16 = 0x1;
pub const MODE_ANGLE: i16 = 0x2;

/// Sanity cap on the per-ping sample count; a corrupt count fails instead of
/// sizing a runaway allocation.
pub const MAX_SAMPLE_COUNT: i32 = 1 << 20;
