//! Domain types for the station ranking server.
//!
//! A [`Station`] is an open-ended record read from the data source, with
//! typed access to the numeric fields the ranking strategies use.

mod station;

pub use station::{InvalidStation, Station, fields};
