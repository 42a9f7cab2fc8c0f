use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("sample datagram too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid sample mode: {mode}")]
    InvalidMode { mode: i16 },
    #[error("invalid sample count: {count}")]
    InvalidSampleCount { count: i32 },
    #[error("sample length mismatch: declared {declared} bytes, mode and count span {expected}")]
    LengthMismatch { declared: usize, expected: usize },
}
