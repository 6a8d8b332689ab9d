//! Station repository.
//!
//! Loads station records from a JSON-lines data source. The source is read
//! in full on every load; nothing is cached between requests, so every query
//! sees the file as it is at that moment.

mod error;
mod source;

pub use error::StationError;
pub use source::{JsonLinesSource, StationSource, parse_stations};
