//! Constants for SensorBoard Core
//!
//! Static classification tables live here so the classifier and the default
//! filter builder share one source of truth. All tables are `&'static`
//! slices: built once into the binary, never mutated at runtime.
//!
//! ## Organization
//!
//! - **Sensors**: membership tables and curated category lists
//!
//! When adding a sensor, put it in exactly one membership table. If it is
//! categorical, give it a curated list in `CATEGORY_VALUES` unless the
//! placeholder universe is acceptable.

/// Sensor membership tables and category universes.
pub mod sensors;

pub use sensors::{BOOLEAN_SENSORS, CATEGORICAL_SENSORS, CATEGORY_VALUES, PLACEHOLDER_CATEGORIES};
