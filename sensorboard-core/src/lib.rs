//! Filter core for SensorBoard telemetry widgets
//!
//! Classifies a sensor's value domain, builds a filter suited to that domain,
//! and decides per data point whether a value makes it into a rendered series.
//! Everything here is pure: no I/O, no timers, no shared mutable state.
//!
//! ```
//! use sensorboard_core::{classify, build_default, evaluate, DomainKind, SensorValue};
//!
//! let kind = classify("operation_mode");
//! assert_eq!(kind, DomainKind::Categorical);
//!
//! // Fresh filters are disabled and let everything through
//! let filter = build_default(kind, "operation_mode");
//! assert!(evaluate(&SensorValue::from("Manual"), &filter));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod catalog;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod filter;
pub mod kind;
pub mod traits;
pub mod value;
pub mod window;

// Public API
pub use catalog::SensorCatalog;
pub use engine::{build_default, classify, evaluate, FilterEngine, SensorFilter};
pub use errors::{FilterError, FilterResult};
pub use filter::{BooleanFilter, CategoricalFilter, Filter, NumericFilter, NumericOperator};
pub use kind::DomainKind;
pub use traits::{BuiltinTables, Predicate, SensorTables};
pub use value::{DataPoint, SensorValue, Timestamp};
pub use window::SeriesWindow;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
