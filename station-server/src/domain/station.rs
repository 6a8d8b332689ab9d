//! Station records.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::geo::GeoPoint;

/// Field names the ranking strategies read.
pub mod fields {
    pub const LAT: &str = "lat";
    pub const LON: &str = "lon";
    pub const MAINTENANCE_PRIORITY: &str = "maintenance_priority";
    pub const PREDICTED_TRAFFIC: &str = "predicted_traffic";
    pub const TRAFFIC: &str = "traffic";
    pub const NUM_VEHICLES_AVAILABLE: &str = "num_vehicles_available";
    pub const CAPACITY: &str = "capacity";
    pub const DISCOUNT: &str = "discount";
}

/// Error returned when a record cannot be turned into a [`Station`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidStation {
    /// The record is valid JSON but not an object.
    #[error("record is not a JSON object")]
    NotAnObject,

    /// A coordinate holds something other than a number.
    #[error("field `{field}` is not numeric")]
    NonNumeric { field: &'static str },
}

/// A vehicle-rental station.
///
/// Stations are open-ended records: every field of the source object is
/// kept and serialized back unchanged. The numeric fields the ranking
/// strategies consume are extracted once at construction; a JSON `null`
/// counts as absent. Only the coordinates must be numbers when present;
/// any other known field holding a non-number is treated as absent too.
/// Each strategy decides for itself how to treat an absent field.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    line: usize,
    lat: Option<f64>,
    lon: Option<f64>,
    maintenance_priority: Option<f64>,
    predicted_traffic: Option<f64>,
    traffic: Option<f64>,
    num_vehicles_available: Option<f64>,
    capacity: Option<f64>,
    discount: Option<f64>,
    record: Map<String, Value>,
}

impl Station {
    /// Build a station from a parsed JSON value.
    ///
    /// `line` is the 1-based source line, used to identify the station in
    /// errors and logs.
    pub fn from_value(line: usize, value: Value) -> Result<Self, InvalidStation> {
        match value {
            Value::Object(record) => Self::from_record(line, record),
            _ => Err(InvalidStation::NotAnObject),
        }
    }

    /// Build a station from a JSON object.
    pub fn from_record(line: usize, record: Map<String, Value>) -> Result<Self, InvalidStation> {
        Ok(Self {
            line,
            lat: coordinate(&record, fields::LAT)?,
            lon: coordinate(&record, fields::LON)?,
            maintenance_priority: numeric(&record, fields::MAINTENANCE_PRIORITY),
            predicted_traffic: numeric(&record, fields::PREDICTED_TRAFFIC),
            traffic: numeric(&record, fields::TRAFFIC),
            num_vehicles_available: numeric(&record, fields::NUM_VEHICLES_AVAILABLE),
            capacity: numeric(&record, fields::CAPACITY),
            discount: None,
            record,
        })
    }

    /// The 1-based line this station was read from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The station's location, if it has both coordinates.
    pub fn location(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.lat?, self.lon?))
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }

    pub fn maintenance_priority(&self) -> Option<f64> {
        self.maintenance_priority
    }

    pub fn predicted_traffic(&self) -> Option<f64> {
        self.predicted_traffic
    }

    /// The generic `traffic` field. Distinct from `predicted_traffic`.
    pub fn traffic(&self) -> Option<f64> {
        self.traffic
    }

    pub fn num_vehicles_available(&self) -> Option<f64> {
        self.num_vehicles_available
    }

    /// Physical dock capacity of the station.
    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    /// The discount computed by the discount strategy, if this is one of its results.
    pub fn discount(&self) -> Option<f64> {
        self.discount
    }

    /// Look up any field of the underlying record.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }

    /// Returns a copy of this station carrying the given `discount` field.
    ///
    /// A non-finite discount is stored as `null`, since JSON has no NaN.
    pub fn with_discount(&self, discount: f64) -> Self {
        let mut station = self.clone();
        let value = serde_json::Number::from_f64(discount)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        station.record.insert(fields::DISCOUNT.to_string(), value);
        station.discount = Some(discount);
        station
    }
}

impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

/// Read an optional numeric field. Anything but a number is absent.
fn numeric(record: &Map<String, Value>, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

/// Read an optional coordinate, rejecting values that are present but not numbers.
fn coordinate(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, InvalidStation> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or(InvalidStation::NonNumeric { field }),
    }
}
