//! Sensor value domains
//!
//! Every sensor is classified into one `DomainKind`, which decides the shape
//! of filter a widget gets for it.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Value domain of a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DomainKind {
    /// Continuous readings (temperature, pressure, ...) - the fallback
    Numeric = 0,
    /// On/off readings, reported as bools or 0/1
    Boolean = 1,
    /// One label out of a fixed set
    Categorical = 2,
    /// Free-form text; never produced by classification
    String = 3,
}

impl DomainKind {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            DomainKind::Numeric => "numeric",
            DomainKind::Boolean => "boolean",
            DomainKind::Categorical => "categorical",
            DomainKind::String => "string",
        }
    }
}

impl Default for DomainKind {
    fn default() -> Self {
        DomainKind::Numeric
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
