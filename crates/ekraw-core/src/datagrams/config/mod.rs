//! Configuration datagram ("CON0") decoding.
//!
//! The configuration datagram is the first datagram of a raw file: survey
//! metadata, the installed software version, and one fixed 320-byte record
//! per transceiver. The parser validates the transceiver count and the
//! declared datagram length before touching any record, so a corrupt count
//! can never trigger a runaway read.
//!
//! Wire-format offsets are defined in `layout`; safe byte access lives in
//! `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::ConfigError;
pub use parser::{ConfigurationDatagram, TransceiverConfig, parse_configuration};
