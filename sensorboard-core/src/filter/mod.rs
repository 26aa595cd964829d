//! Type-Appropriate Filters for Sensor Series
//!
//! ## Overview
//!
//! Each widget owns one `Filter`, shaped by the domain of the sensor it
//! draws. The filter starts disabled, is edited in place as the user clicks
//! through the filter panel, and is dropped with the widget.
//!
//! ```text
//!             enable()
//!   Disabled ──────────▶ Enabled
//!  (pass-all) ◀────────── (predicate active)
//!             disable()
//! ```
//!
//! There are no automatic transitions: nothing times out or re-enables.
//!
//! ## Variants
//!
//! | Kind        | Variant              | Predicate                           |
//! |-------------|----------------------|-------------------------------------|
//! | Numeric     | `NumericFilter`      | threshold / range on coerced number |
//! | Boolean     | `BooleanFilter`      | show/hide per state, 0 is false     |
//! | Categorical | `CategoricalFilter`  | label must be selected              |
//!
//! `DomainKind::String` has no variant of its own. Sensors of that kind get
//! a disabled numeric filter, which lets text through untouched.
//!
//! ## Fail-Open Evaluation
//!
//! A value the active variant cannot interpret is kept, never dropped.
//! Widgets for exotic sensors rely on this; do not tighten it without
//! checking them.
//!
//! ## JSON Shape
//!
//! ```json
//! {"type": "numeric", "enabled": true, "operator": "between", "min": 1, "max": 10}
//! {"type": "boolean", "enabled": true, "showTrue": false, "showFalse": true}
//! {"type": "categorical", "enabled": true, "selectedValues": ["A"], "availableValues": ["A", "B"]}
//! ```

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::errors::{FilterError, FilterResult};
use crate::kind::DomainKind;
use crate::traits::Predicate;
use crate::value::SensorValue;

mod boolean;
mod categorical;
mod numeric;

pub use boolean::BooleanFilter;
pub use categorical::CategoricalFilter;
pub use numeric::{NumericFilter, NumericOperator};

/// Filter state for one widget, tagged by sensor domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Filter {
    /// Threshold filter for numeric sensors
    Numeric(NumericFilter),
    /// Show/hide filter for boolean sensors
    Boolean(BooleanFilter),
    /// Selection filter for categorical sensors
    Categorical(CategoricalFilter),
}

impl Filter {
    /// Domain kind this filter applies to
    pub fn kind(&self) -> DomainKind {
        match self {
            Filter::Numeric(_) => DomainKind::Numeric,
            Filter::Boolean(_) => DomainKind::Boolean,
            Filter::Categorical(_) => DomainKind::Categorical,
        }
    }

    /// Turn the predicate on or off
    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            Filter::Numeric(f) => f.enabled = enabled,
            Filter::Boolean(f) => f.enabled = enabled,
            Filter::Categorical(f) => f.enabled = enabled,
        }
    }

    /// Enable the filter
    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    /// Disable the filter
    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    /// Numeric variant, if this is one
    pub fn as_numeric(&self) -> Option<&NumericFilter> {
        match self {
            Filter::Numeric(f) => Some(f),
            _ => None,
        }
    }

    /// Boolean variant, if this is one
    pub fn as_boolean(&self) -> Option<&BooleanFilter> {
        match self {
            Filter::Boolean(f) => Some(f),
            _ => None,
        }
    }

    /// Categorical variant, if this is one
    pub fn as_categorical(&self) -> Option<&CategoricalFilter> {
        match self {
            Filter::Categorical(f) => Some(f),
            _ => None,
        }
    }

    /// Edit as a numeric filter
    pub fn as_numeric_mut(&mut self) -> FilterResult<&mut NumericFilter> {
        let found = self.kind();
        match self {
            Filter::Numeric(f) => Ok(f),
            _ => Err(mismatch(DomainKind::Numeric, found)),
        }
    }

    /// Edit as a boolean filter
    pub fn as_boolean_mut(&mut self) -> FilterResult<&mut BooleanFilter> {
        let found = self.kind();
        match self {
            Filter::Boolean(f) => Ok(f),
            _ => Err(mismatch(DomainKind::Boolean, found)),
        }
    }

    /// Edit as a categorical filter
    pub fn as_categorical_mut(&mut self) -> FilterResult<&mut CategoricalFilter> {
        let found = self.kind();
        match self {
            Filter::Categorical(f) => Ok(f),
            _ => Err(mismatch(DomainKind::Categorical, found)),
        }
    }

    /// Check variant invariants (finite bounds, selection within universe)
    pub fn validate(&self) -> FilterResult<()> {
        match self {
            Filter::Numeric(f) => f.validate(),
            Filter::Boolean(_) => Ok(()),
            Filter::Categorical(f) => f.validate(),
        }
    }

    /// Parse a filter from JSON and check its invariants
    ///
    /// Categorical duplicates are dropped and the selection is put back in
    /// universe order.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let mut filter: Filter = serde_json::from_str(json)?;
        filter.validate()?;
        if let Filter::Categorical(f) = &mut filter {
            f.normalize();
        }
        Ok(filter)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> FilterResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn mismatch(expected: DomainKind, found: DomainKind) -> FilterError {
    log_debug!("Filter accessed as {} but is {}", expected, found);
    FilterError::KindMismatch { expected, found }
}

impl Predicate for Filter {
    fn is_enabled(&self) -> bool {
        match self {
            Filter::Numeric(f) => f.is_enabled(),
            Filter::Boolean(f) => f.is_enabled(),
            Filter::Categorical(f) => f.is_enabled(),
        }
    }

    fn matches(&self, value: &SensorValue) -> bool {
        match self {
            Filter::Numeric(f) => f.matches(value),
            Filter::Boolean(f) => f.matches(value),
            Filter::Categorical(f) => f.matches(value),
        }
    }
}

impl From<NumericFilter> for Filter {
    fn from(filter: NumericFilter) -> Self {
        Filter::Numeric(filter)
    }
}

impl From<BooleanFilter> for Filter {
    fn from(filter: BooleanFilter) -> Self {
        Filter::Boolean(filter)
    }
}

impl From<CategoricalFilter> for Filter {
    fn from(filter: CategoricalFilter) -> Self {
        Filter::Categorical(filter)
    }
}
