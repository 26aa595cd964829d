//! Core traits for filters and sensor tables
//!
//! Two seams: `Predicate` is what a filter does with a value, `SensorTables`
//! is where classification data comes from. Keep them small - callers
//! evaluate once per data point per widget.

use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::sensors;
use crate::filter::{BooleanFilter, CategoricalFilter, Filter, NumericFilter};
use crate::kind::DomainKind;
use crate::value::SensorValue;

/// Inclusion test for a single value
pub trait Predicate {
    /// Whether the predicate is active
    fn is_enabled(&self) -> bool;

    /// Variant-specific test, ignoring the enabled flag
    fn matches(&self, value: &SensorValue) -> bool;

    /// Whether `value` survives: always true while disabled
    fn accepts(&self, value: &SensorValue) -> bool {
        !self.is_enabled() || self.matches(value)
    }
}

/// Source of sensor classification data
///
/// Implementors only answer membership questions; classification order and
/// default filter shapes are shared by every table.
pub trait SensorTables {
    /// Sensor reports on/off state
    fn is_boolean(&self, sensor: &str) -> bool;

    /// Sensor reports a label from a fixed set
    fn is_categorical(&self, sensor: &str) -> bool;

    /// Curated category universe for a sensor, if there is one
    fn category_values(&self, sensor: &str) -> Option<Vec<String>>;

    /// Universe for categorical sensors without a curated list
    fn placeholder_values(&self) -> Vec<String> {
        to_owned(sensors::PLACEHOLDER_CATEGORIES)
    }

    /// Classify a sensor: boolean table first, then categorical, else numeric
    fn classify(&self, sensor: &str) -> DomainKind {
        if self.is_boolean(sensor) {
            DomainKind::Boolean
        } else if self.is_categorical(sensor) {
            DomainKind::Categorical
        } else {
            DomainKind::Numeric
        }
    }

    /// Build the disabled, pass-through filter for a sensor of `kind`
    fn build_default(&self, kind: DomainKind, sensor: &str) -> Filter {
        match kind {
            DomainKind::Boolean => Filter::Boolean(BooleanFilter::new()),
            DomainKind::Categorical => {
                let values = self.category_values(sensor).unwrap_or_else(|| {
                    log_debug!("No categories for {}, using placeholder", sensor);
                    self.placeholder_values()
                });
                Filter::Categorical(CategoricalFilter::new(values))
            }
            DomainKind::Numeric => Filter::Numeric(NumericFilter::new()),
            DomainKind::String => {
                log_warn!("Sensor {} has string domain, using pass-through numeric filter", sensor);
                Filter::Numeric(NumericFilter::new())
            }
        }
    }
}

/// The tables compiled into the crate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinTables;

impl SensorTables for BuiltinTables {
    fn is_boolean(&self, sensor: &str) -> bool {
        sensors::BOOLEAN_SENSORS.contains(&sensor)
    }

    fn is_categorical(&self, sensor: &str) -> bool {
        sensors::CATEGORICAL_SENSORS.contains(&sensor)
    }

    fn category_values(&self, sensor: &str) -> Option<Vec<String>> {
        sensors::category_values(sensor).map(to_owned)
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| String::from(*v)).collect()
}
