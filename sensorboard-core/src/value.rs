//! Raw telemetry values
//!
//! The stream hands widgets whatever the sensor reported: a number, a bool,
//! or a string label. Filters see it through two coercions:
//!
//! ```text
//! value          as_number()    label()
//! 12.5           Some(12.5)     "12.5"
//! 3.0            Some(3.0)      "3"
//! true           Some(1.0)      "true"
//! " 42 "         Some(42.0)     " 42 "
//! "Auto"         None           "Auto"
//! ""             None           ""
//! NaN            Some(NaN)      "NaN"
//! ```
//!
//! `as_number()` may return NaN for a NaN reading; callers treat that the
//! same as `None`.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Milliseconds since the stream started
pub type Timestamp = u64;

/// A single value as reported by a sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    /// Bool reading
    Bool(bool),
    /// Numeric reading
    Number(f64),
    /// Label or free-form text
    Text(String),
}

impl SensorValue {
    /// Coerce to a number; `None` when the value has no numeric reading
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SensorValue::Number(n) => Some(*n),
            SensorValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            SensorValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        }
    }

    /// String representation used for category matching
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            SensorValue::Text(s) => Cow::Borrowed(s.as_str()),
            SensorValue::Bool(true) => Cow::Borrowed("true"),
            SensorValue::Bool(false) => Cow::Borrowed("false"),
            SensorValue::Number(n) => number_label(*n),
        }
    }

    /// Check if this is a bool reading
    pub fn is_bool(&self) -> bool {
        matches!(self, SensorValue::Bool(_))
    }
}

fn number_label(n: f64) -> Cow<'static, str> {
    if n.is_nan() {
        Cow::Borrowed("NaN")
    } else if n == f64::INFINITY {
        Cow::Borrowed("Infinity")
    } else if n == f64::NEG_INFINITY {
        Cow::Borrowed("-Infinity")
    } else if n == 0.0 {
        // Covers -0.0 as well
        Cow::Borrowed("0")
    } else {
        Cow::Owned(n.to_string())
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<f64> for SensorValue {
    fn from(value: f64) -> Self {
        SensorValue::Number(value)
    }
}

impl From<f32> for SensorValue {
    fn from(value: f32) -> Self {
        SensorValue::Number(f64::from(value))
    }
}

impl From<i32> for SensorValue {
    fn from(value: i32) -> Self {
        SensorValue::Number(f64::from(value))
    }
}

impl From<bool> for SensorValue {
    fn from(value: bool) -> Self {
        SensorValue::Bool(value)
    }
}

impl From<&str> for SensorValue {
    fn from(value: &str) -> Self {
        SensorValue::Text(value.into())
    }
}

impl From<String> for SensorValue {
    fn from(value: String) -> Self {
        SensorValue::Text(value)
    }
}

/// Single reading with timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// When the reading was taken
    pub timestamp: Timestamp,
    /// What the sensor reported
    pub value: SensorValue,
}

impl DataPoint {
    /// Create a data point
    pub fn new(timestamp: Timestamp, value: impl Into<SensorValue>) -> Self {
        Self {
            timestamp,
            value: value.into(),
        }
    }
}
