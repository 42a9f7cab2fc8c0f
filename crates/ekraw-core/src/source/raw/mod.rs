//! EK60 raw-file framing.
//!
//! A raw file is a sequence of length-framed datagrams: a 4-byte
//! little-endian length, the datagram body, and (in complete files) a
//! trailing repeat of the length. This module provides a `DatagramSource`
//! backed by a raw file. It handles file I/O and frame delimiting only;
//! datagram bodies are decoded by the `datagrams` modules.

pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::RawFileSource;
