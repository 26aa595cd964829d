//! Error Types for Filter Editing and Configuration
//!
//! ## What Can Fail
//!
//! The three hot-path operations never fail:
//!
//! - `classify` falls back to `Numeric` for unknown sensors
//! - `build_default` falls back to placeholder categories
//! - `evaluate` passes values it cannot interpret (fail-open)
//!
//! Errors only come from the surfaces around them, where a caller hands us
//! something we can check:
//!
//! ### Editing
//! - `UnknownCategory`: selecting a value outside the filter's universe
//! - `InvalidBound`: NaN or infinite numeric bound
//! - `KindMismatch`: editing a filter through the wrong variant, or binding a
//!   filter to a sensor of another kind
//!
//! ### Configuration
//! - `EmptyCategories`: a catalog entry with nothing to select
//! - `Parse`: malformed catalog or filter JSON
//!
//! ## Handling Strategy
//!
//! ```rust
//! use sensorboard_core::{build_default, DomainKind, FilterError};
//!
//! let mut filter = build_default(DomainKind::Categorical, "operation_mode");
//! let categorical = filter.as_categorical_mut()?;
//!
//! match categorical.select("Turbo") {
//!     Ok(()) => {}
//!     Err(FilterError::UnknownCategory { .. }) => {
//!         // Stale UI state - rebuild the selection widget
//!     }
//!     Err(_) => {}
//! }
//! # Ok::<(), FilterError>(())
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

use crate::kind::DomainKind;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter editing and configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Filter variant does not match the sensor's domain kind
    #[error("Filter kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// Kind required by the sensor or accessor
        expected: DomainKind,
        /// Kind of the filter actually supplied
        found: DomainKind,
    },

    /// Category is not part of the filter's available values
    #[error("Unknown category: {value}")]
    UnknownCategory {
        /// The rejected category label
        value: String,
    },

    /// Numeric bound is NaN or infinite
    #[error("Invalid bound {value}: must be finite or unset")]
    InvalidBound {
        /// The rejected bound
        value: f64,
    },

    /// Catalog entry with an empty category list
    #[error("Sensor {sensor} has no categories")]
    EmptyCategories {
        /// Sensor identifier (or "placeholder")
        sensor: String,
    },

    /// JSON could not be parsed
    #[error("Failed to parse: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        use alloc::string::ToString;
        FilterError::Parse(err.to_string())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::KindMismatch { expected, found } =>
                defmt::write!(fmt, "Kind mismatch: expected {}, found {}", expected.name(), found.name()),
            Self::UnknownCategory { value } =>
                defmt::write!(fmt, "Unknown category: {}", value.as_str()),
            Self::InvalidBound { value } =>
                defmt::write!(fmt, "Invalid bound {}", value),
            Self::EmptyCategories { sensor } =>
                defmt::write!(fmt, "No categories for {}", sensor.as_str()),
            Self::Parse(reason) =>
                defmt::write!(fmt, "Parse error: {}", reason.as_str()),
        }
    }
}
