//! On/off filter for boolean sensors

use serde::{Deserialize, Serialize};

use crate::traits::Predicate;
use crate::value::SensorValue;

/// Show/hide toggle per state
///
/// Numeric readings count as `false` when zero and `true` otherwise, since
/// some transports report switches as 0/1. Text readings always pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanFilter {
    /// Whether the predicate is active
    #[serde(default)]
    pub enabled: bool,

    /// Keep readings in the `true` state
    #[serde(default = "shown")]
    pub show_true: bool,

    /// Keep readings in the `false` state
    #[serde(default = "shown")]
    pub show_false: bool,
}

fn shown() -> bool {
    true
}

impl Default for BooleanFilter {
    fn default() -> Self {
        Self {
            enabled: false,
            show_true: true,
            show_false: true,
        }
    }
}

impl BooleanFilter {
    /// Create a disabled filter showing both states
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an enabled filter
    pub fn active(show_true: bool, show_false: bool) -> Self {
        Self {
            enabled: true,
            show_true,
            show_false,
        }
    }

    /// Enable the filter
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable the filter
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Show or hide `true` readings
    pub fn set_show_true(&mut self, show: bool) {
        self.show_true = show;
    }

    /// Show or hide `false` readings
    pub fn set_show_false(&mut self, show: bool) {
        self.show_false = show;
    }
}

impl Predicate for BooleanFilter {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn matches(&self, value: &SensorValue) -> bool {
        let state = match value {
            SensorValue::Bool(b) => *b,
            SensorValue::Number(n) => *n != 0.0,
            SensorValue::Text(_) => return true,
        };

        if state {
            self.show_true
        } else {
            self.show_false
        }
    }
}
