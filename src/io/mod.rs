//! I/O module
//!
//! Handles the JSON line wire format and streaming input.
//!
//! # Components
//!
//! - `json_format` - Event decoding, decision encoding, diagnostic rendering
//! - `line_reader` - Streaming line reader with iterator interface

pub mod json_format;
pub mod line_reader;

pub use json_format::{decode_event, diagnostic, encode_decision};
pub use line_reader::JsonLineReader;
