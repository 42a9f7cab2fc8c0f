use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration datagram too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid transceiver count: {count}")]
    InvalidTransceiverCount { count: i32 },
    #[error("configuration length mismatch: declared {declared} bytes, field layout spans {expected}")]
    LengthMismatch { declared: usize, expected: usize },
}
