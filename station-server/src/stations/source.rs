//! JSON-lines station source.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Station;

use super::error::StationError;

/// Something that can produce the current set of stations.
///
/// Implementations must return a fresh station set on every call.
pub trait StationSource {
    /// Load every valid station from the source.
    fn load(&self) -> Result<Vec<Station>, StationError>;
}

/// A file holding one JSON station record per line.
#[derive(Debug, Clone)]
pub struct JsonLinesSource {
    path: PathBuf,
}

impl JsonLinesSource {
    /// Create a source reading from the given path.
    ///
    /// The file is not opened until [`StationSource::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StationSource for JsonLinesSource {
    fn load(&self) -> Result<Vec<Station>, StationError> {
        let contents = std::fs::read(&self.path).map_err(|source| StationError::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(parse_stations(&contents))
    }
}

impl StationSource for Vec<Station> {
    fn load(&self) -> Result<Vec<Station>, StationError> {
        Ok(self.clone())
    }
}

/// Parse JSON-lines station data.
///
/// Each line is parsed on its own. Lines that are blank, not valid JSON, not
/// a JSON object, or that hold a non-numeric `lat` or `lon` are skipped; one
/// bad line never prevents the rest from loading.
pub fn parse_stations(contents: &[u8]) -> Vec<Station> {
    let mut stations = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in contents.split(|&b| b == b'\n').enumerate() {
        let line = idx + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let parsed = serde_json::from_slice::<serde_json::Value>(raw)
            .map_err(|e| e.to_string())
            .and_then(|value| Station::from_value(line, value).map_err(|e| e.to_string()));

        match parsed {
            Ok(station) => stations.push(station),
            Err(reason) => {
                debug!(line, %reason, "skipping malformed station record");
                skipped += 1;
            }
        }
    }

    debug!(loaded = stations.len(), skipped, "parsed station records");
    stations
}
