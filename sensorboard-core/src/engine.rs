//! Filter Engine
//!
//! ## Overview
//!
//! The engine is the single entry point the widget layer talks to:
//!
//! ```text
//! sensor id ──classify──▶ DomainKind ──build_default──▶ Filter
//!                                                         │ (user edits)
//! raw value ─────────────────────evaluate─────────────────┴──▶ keep / drop
//! ```
//!
//! All three steps are pure. The engine holds nothing but read-only tables,
//! so one instance can serve every widget concurrently.
//!
//! ## Sensor Binding
//!
//! A `Filter` on its own does not know which sensor it belongs to. A
//! `SensorFilter` pairs the two and is built from the sensor's kind, so a
//! widget cannot end up with a boolean filter on a numeric sensor.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorboard_core::{FilterEngine, SensorValue};
//!
//! let engine = FilterEngine::new();
//! let mut door = engine.bind("door_open");
//!
//! let filter = door.filter_mut().as_boolean_mut()?;
//! filter.set_show_false(false);
//! filter.enable();
//!
//! assert!(door.evaluate(&SensorValue::Bool(true)));
//! assert!(!door.evaluate(&SensorValue::Number(0.0)));
//! # Ok::<(), sensorboard_core::FilterError>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::errors::{FilterError, FilterResult};
use crate::filter::Filter;
use crate::kind::DomainKind;
use crate::traits::{BuiltinTables, Predicate, SensorTables};
use crate::value::SensorValue;

/// Classify a sensor using the built-in tables
pub fn classify(sensor: &str) -> DomainKind {
    BuiltinTables.classify(sensor)
}

/// Build the default filter for `kind` using the built-in tables
pub fn build_default(kind: DomainKind, sensor: &str) -> Filter {
    BuiltinTables.build_default(kind, sensor)
}

/// Whether `value` survives `filter`
pub fn evaluate(value: &SensorValue, filter: &Filter) -> bool {
    filter.accepts(value)
}

/// Classification and evaluation over a set of sensor tables
#[derive(Debug, Clone, Default)]
pub struct FilterEngine<T: SensorTables = BuiltinTables> {
    tables: T,
}

impl FilterEngine<BuiltinTables> {
    /// Engine over the built-in tables
    pub fn new() -> Self {
        Self {
            tables: BuiltinTables,
        }
    }
}

impl<T: SensorTables> FilterEngine<T> {
    /// Engine over custom tables
    pub fn with_tables(tables: T) -> Self {
        Self { tables }
    }

    /// The tables in use
    pub fn tables(&self) -> &T {
        &self.tables
    }

    /// Classify a sensor
    pub fn classify(&self, sensor: &str) -> DomainKind {
        self.tables.classify(sensor)
    }

    /// Build the default filter for `kind`
    pub fn build_default(&self, kind: DomainKind, sensor: &str) -> Filter {
        self.tables.build_default(kind, sensor)
    }

    /// Classify and build in one step
    pub fn default_filter(&self, sensor: &str) -> Filter {
        self.build_default(self.classify(sensor), sensor)
    }

    /// Whether `value` survives `filter`
    pub fn evaluate(&self, value: &SensorValue, filter: &Filter) -> bool {
        evaluate(value, filter)
    }

    /// Check `filter` has the right shape for `sensor`
    ///
    /// `String` sensors carry a numeric filter, so that pairing is accepted.
    pub fn check(&self, sensor: &str, filter: &Filter) -> FilterResult<()> {
        let expected = match self.classify(sensor) {
            DomainKind::String => DomainKind::Numeric,
            kind => kind,
        };
        let found = filter.kind();
        if expected == found {
            Ok(())
        } else {
            log_warn!("Filter for {} is {}, expected {}", sensor, found, expected);
            Err(FilterError::KindMismatch { expected, found })
        }
    }

    /// Values that survive `filter`, in input order
    pub fn retain<'a>(&self, values: &'a [SensorValue], filter: &Filter) -> Vec<&'a SensorValue> {
        values.iter().filter(|v| filter.accepts(v)).collect()
    }

    /// New default filter bound to `sensor`
    pub fn bind(&self, sensor: impl Into<String>) -> SensorFilter {
        let sensor = sensor.into();
        let kind = self.classify(&sensor);
        let filter = self.build_default(kind, &sensor);
        SensorFilter { sensor, kind, filter }
    }

    /// Bind an existing filter to `sensor`, checking its shape
    pub fn attach(&self, sensor: impl Into<String>, filter: Filter) -> FilterResult<SensorFilter> {
        let sensor = sensor.into();
        self.check(&sensor, &filter)?;
        Ok(SensorFilter {
            kind: self.classify(&sensor),
            sensor,
            filter,
        })
    }
}

/// A filter bound to the sensor it was built for
///
/// The variant is fixed at construction; edits through `filter_mut` can
/// change settings but not the variant, as `Filter` has no setter for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorFilter {
    sensor: String,
    kind: DomainKind,
    filter: Filter,
}

impl SensorFilter {
    /// Sensor identifier
    pub fn sensor(&self) -> &str {
        &self.sensor
    }

    /// Sensor domain
    pub fn kind(&self) -> DomainKind {
        self.kind
    }

    /// Current filter state
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Edit the filter in place
    pub fn filter_mut(&mut self) -> FilterHandle<'_> {
        FilterHandle {
            filter: &mut self.filter,
        }
    }

    /// Whether `value` survives the filter
    pub fn evaluate(&self, value: &SensorValue) -> bool {
        self.filter.accepts(value)
    }
}

/// Mutable view of a bound filter that cannot swap its variant
#[derive(Debug)]
pub struct FilterHandle<'a> {
    filter: &'a mut Filter,
}

impl<'a> FilterHandle<'a> {
    /// Turn the predicate on or off
    pub fn set_enabled(&mut self, enabled: bool) {
        self.filter.set_enabled(enabled);
    }

    /// Enable the filter
    pub fn enable(&mut self) {
        self.filter.enable();
    }

    /// Disable the filter
    pub fn disable(&mut self) {
        self.filter.disable();
    }

    /// Edit as a numeric filter
    pub fn as_numeric_mut(self) -> FilterResult<&'a mut crate::filter::NumericFilter> {
        self.filter.as_numeric_mut()
    }

    /// Edit as a boolean filter
    pub fn as_boolean_mut(self) -> FilterResult<&'a mut crate::filter::BooleanFilter> {
        self.filter.as_boolean_mut()
    }

    /// Edit as a categorical filter
    pub fn as_categorical_mut(self) -> FilterResult<&'a mut crate::filter::CategoricalFilter> {
        self.filter.as_categorical_mut()
    }
}
