//! Sample datagram ("RAW0") decoding.
//!
//! Sample datagrams follow the configuration datagram and carry one ping of
//! one channel: transceiver state at transmit time plus the received power
//! and split-beam angle arrays. The record shape follows the SIMRAD EK60
//! datagram reference; presence of the power and angle arrays is keyed off
//! the mode bit flags, and the declared datagram length must account for
//! them exactly.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::SampleError;
pub use parser::{AngleSample, SampleDatagram, parse_sample, power_to_db};
