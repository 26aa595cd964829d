//! Deployment-Specific Sensor Catalog
//!
//! ## Overview
//!
//! The built-in tables cover the demo plant. Real deployments name their
//! sensors differently, so a `SensorCatalog` can be loaded from JSON and
//! handed to a `FilterEngine` instead:
//!
//! ```json
//! {
//!   "booleanSensors": ["conveyor_jam"],
//!   "categoricalSensors": ["recipe"],
//!   "categoryValues": {"recipe": ["Lager", "Stout", "IPA"]},
//!   "placeholderValues": ["Other 1", "Other 2", "Other 3"]
//! }
//! ```
//!
//! Every field is optional. Loading validates the document once; after that
//! the catalog is read-only and safe to share between widgets.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorboard_core::{DomainKind, FilterEngine, SensorCatalog};
//!
//! let catalog = SensorCatalog::builtin()
//!     .with_boolean_sensor("conveyor_jam")
//!     .with_categorical_sensor("recipe", ["Lager", "Stout", "IPA"]);
//!
//! let engine = FilterEngine::with_tables(catalog);
//! assert_eq!(engine.classify("conveyor_jam"), DomainKind::Boolean);
//! assert_eq!(engine.classify("operation_mode"), DomainKind::Categorical);
//! ```

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::constants::sensors;
use crate::errors::{FilterError, FilterResult};
use crate::traits::SensorTables;

/// Owned, configurable classification tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorCatalog {
    /// Sensors reporting on/off state
    #[serde(default)]
    pub boolean_sensors: BTreeSet<String>,

    /// Sensors reporting a label from a fixed set
    #[serde(default)]
    pub categorical_sensors: BTreeSet<String>,

    /// Curated category universes, in display order
    #[serde(default)]
    pub category_values: BTreeMap<String, Vec<String>>,

    /// Universe for categorical sensors without a curated list
    #[serde(default = "default_placeholder")]
    pub placeholder_values: Vec<String>,
}

fn default_placeholder() -> Vec<String> {
    sensors::PLACEHOLDER_CATEGORIES.iter().map(|v| v.to_string()).collect()
}

impl Default for SensorCatalog {
    fn default() -> Self {
        Self {
            boolean_sensors: BTreeSet::new(),
            categorical_sensors: BTreeSet::new(),
            category_values: BTreeMap::new(),
            placeholder_values: default_placeholder(),
        }
    }
}

impl SensorCatalog {
    /// Create an empty catalog: every sensor classifies as numeric
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the tables compiled into the crate
    pub fn builtin() -> Self {
        Self {
            boolean_sensors: sensors::BOOLEAN_SENSORS.iter().map(|s| s.to_string()).collect(),
            categorical_sensors: sensors::CATEGORICAL_SENSORS.iter().map(|s| s.to_string()).collect(),
            category_values: sensors::CATEGORY_VALUES
                .iter()
                .map(|(id, values)| (id.to_string(), values.iter().map(|v| v.to_string()).collect()))
                .collect(),
            placeholder_values: default_placeholder(),
        }
    }

    /// Load and validate a catalog from JSON
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let mut catalog: SensorCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        catalog.dedup_categories();
        log_debug!(
            "Loaded catalog: {} boolean, {} categorical sensors",
            catalog.boolean_sensors.len(),
            catalog.categorical_sensors.len()
        );
        Ok(catalog)
    }

    /// Add a boolean sensor
    pub fn with_boolean_sensor(mut self, sensor: impl Into<String>) -> Self {
        self.boolean_sensors.insert(sensor.into());
        self
    }

    /// Add a categorical sensor with its category universe
    ///
    /// An empty `values` leaves the sensor on the placeholder universe.
    pub fn with_categorical_sensor<I, S>(mut self, sensor: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sensor = sensor.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if !values.is_empty() {
            self.category_values.insert(sensor.clone(), values);
        }
        self.categorical_sensors.insert(sensor);
        self.dedup_categories();
        self
    }

    /// Check no category list is empty
    pub fn validate(&self) -> FilterResult<()> {
        if self.placeholder_values.is_empty() {
            return Err(FilterError::EmptyCategories {
                sensor: "placeholder".to_string(),
            });
        }
        if let Some((sensor, _)) = self.category_values.iter().find(|(_, values)| values.is_empty()) {
            return Err(FilterError::EmptyCategories {
                sensor: sensor.clone(),
            });
        }
        for sensor in self.boolean_sensors.intersection(&self.categorical_sensors) {
            log_warn!("Sensor {} is listed as boolean and categorical; boolean wins", sensor);
        }
        Ok(())
    }

    fn dedup_categories(&mut self) {
        for values in self.category_values.values_mut() {
            let mut seen = BTreeSet::new();
            values.retain(|v| seen.insert(v.clone()));
        }
        let mut seen = BTreeSet::new();
        self.placeholder_values.retain(|v| seen.insert(v.clone()));
    }
}

impl SensorTables for SensorCatalog {
    fn is_boolean(&self, sensor: &str) -> bool {
        self.boolean_sensors.contains(sensor)
    }

    fn is_categorical(&self, sensor: &str) -> bool {
        self.categorical_sensors.contains(sensor)
    }

    fn category_values(&self, sensor: &str) -> Option<Vec<String>> {
        self.category_values.get(sensor).cloned()
    }

    fn placeholder_values(&self) -> Vec<String> {
        self.placeholder_values.clone()
    }
}
