//! Output handling for the collected article set.
//!
//! # Submodules
//!
//! - [`json`]: Writes the accumulated records as one pretty-printed JSON
//!   array, the file every downstream consumer reads
//! - [`text`]: The companion reader; renders records from that file as
//!   human-readable text blocks on stdout

pub mod json;
pub mod text;
