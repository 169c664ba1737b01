//! Where collected points and errors go.

use std::collections::BTreeMap;
use std::fmt;

use parking_lot::Mutex;
use vsan_core::DateTime;

/// Tag set of a point, ordered by key.
pub type Tags = BTreeMap<String, String>;

/// A field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
}

impl FieldValue {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}i"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One measurement point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub measurement: &'static str,
    pub tags: Tags,
    pub fields: BTreeMap<String, FieldValue>,
    /// Sample time; `None` means "time of collection".
    pub timestamp: Option<DateTime>,
}

impl Point {
    #[must_use]
    pub fn new(measurement: &'static str, tags: Tags) -> Self {
        Self {
            measurement,
            tags,
            fields: BTreeMap::new(),
            timestamp: None,
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn at(mut self, timestamp: DateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Sink for collected points and non-fatal errors.
pub trait Accumulator: Send + Sync {
    fn add_point(&self, point: Point);

    fn add_error(&self, error: &(dyn std::error::Error + Send + Sync));
}

/// Accumulator that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryAccumulator {
    points: Mutex<Vec<Point>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.points.lock().clone()
    }

    /// Points of one measurement, in arrival order.
    #[must_use]
    pub fn measurement(&self, measurement: &str) -> Vec<Point> {
        self.points
            .lock()
            .iter()
            .filter(|p| p.measurement == measurement)
            .cloned()
            .collect()
    }

    /// Error messages, in arrival order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }
}

impl Accumulator for MemoryAccumulator {
    fn add_point(&self, point: Point) {
        self.points.lock().push(point);
    }

    fn add_error(&self, error: &(dyn std::error::Error + Send + Sync)) {
        self.errors.lock().push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_accumulator_filters_by_measurement() {
        let acc = MemoryAccumulator::new();
        acc.add_point(Point::new("a", Tags::new()).field("x", FieldValue::Int(1)));
        acc.add_point(Point::new("b", Tags::new()).field("y", FieldValue::Float(0.5)));
        acc.add_point(Point::new("a", Tags::new()).at(DateTime::from_millis(1_000)));

        let a = acc.measurement("a");
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].fields["x"], FieldValue::Int(1));
        assert_eq!(a[1].timestamp, Some(DateTime::from_millis(1_000)));
        assert_eq!(acc.points().len(), 3);
    }

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::Int(-1).to_string(), "-1i");
        assert_eq!(FieldValue::Float(2.5).to_string(), "2.5");
        assert!((FieldValue::Int(3).as_f64() - 3.0).abs() < f64::EPSILON);
    }
}
