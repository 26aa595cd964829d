//! Numeric threshold filter
//!
//! ## Operators
//!
//! ```text
//! operator   excludes when                 unset bound
//! Between    v < min  or  v > max          that side is open
//! Greater    v <= min                      passes everything
//! Less       v >= max                      passes everything
//! Equal      v != min                      passes everything
//! ```
//!
//! Between is inclusive at both ends while Greater and Less are strict. The
//! mismatch is deliberate compatibility with existing dashboards; keep it.
//!
//! Values that do not coerce to a number (labels, empty strings, NaN) always
//! pass: a gauge should show an odd reading rather than silently drop it.

use alloc::string::String;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{FilterError, FilterResult};
use crate::traits::Predicate;
use crate::value::SensorValue;

/// Comparison applied by a numeric filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericOperator {
    /// Inclusive range `[min, max]`
    Between,
    /// Strictly above `min`
    Greater,
    /// Strictly below `max`
    Less,
    /// Exactly `min`
    Equal,
    /// Operator missing or not understood; passes everything
    Unrecognized,
}

impl NumericOperator {
    /// Parse an operator name; unknown names map to `Unrecognized`
    pub fn from_name(name: &str) -> Self {
        match name {
            "between" => NumericOperator::Between,
            "greater" => NumericOperator::Greater,
            "less" => NumericOperator::Less,
            "equal" => NumericOperator::Equal,
            _ => NumericOperator::Unrecognized,
        }
    }
}

impl Default for NumericOperator {
    fn default() -> Self {
        NumericOperator::Between
    }
}

impl<'de> Deserialize<'de> for NumericOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.map_or(NumericOperator::Unrecognized, |name| Self::from_name(&name)))
    }
}

fn missing_operator() -> NumericOperator {
    NumericOperator::Unrecognized
}

/// Threshold filter for numeric sensors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericFilter {
    /// Whether the predicate is active
    #[serde(default)]
    pub enabled: bool,

    /// Lower bound, or the target for `Equal`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// How bounds are applied
    #[serde(default = "missing_operator")]
    pub operator: NumericOperator,
}

impl Default for NumericFilter {
    fn default() -> Self {
        Self {
            enabled: false,
            min: None,
            max: None,
            operator: NumericOperator::Between,
        }
    }
}

impl NumericFilter {
    /// Create a disabled filter with unset bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an enabled filter with the given operator and bounds
    pub fn active(operator: NumericOperator, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            enabled: true,
            min,
            max,
            operator,
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

    /// Change the comparison
    pub fn set_operator(&mut self, operator: NumericOperator) {
        self.operator = operator;
    }

    /// Set or clear the lower bound
    pub fn set_min(&mut self, min: Option<f64>) -> FilterResult<()> {
        self.min = check_bound(min)?;
        Ok(())
    }

    /// Set or clear the upper bound
    pub fn set_max(&mut self, max: Option<f64>) -> FilterResult<()> {
        self.max = check_bound(max)?;
        Ok(())
    }

    /// Set both bounds at once; neither changes if either is invalid
    ///
    /// An inverted range is stored as given and simply excludes everything
    /// under `Between`.
    pub fn set_bounds(&mut self, min: Option<f64>, max: Option<f64>) -> FilterResult<()> {
        let min = check_bound(min)?;
        let max = check_bound(max)?;
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Clear both bounds
    pub fn clear_bounds(&mut self) {
        self.min = None;
        self.max = None;
    }

    /// Set bounds from an observed data range, in either order
    pub fn fit_range(&mut self, lo: f64, hi: f64) -> FilterResult<()> {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.set_bounds(Some(lo), Some(hi))
    }

    /// Check bounds are finite
    pub fn validate(&self) -> FilterResult<()> {
        check_bound(self.min)?;
        check_bound(self.max)?;
        Ok(())
    }
}

fn check_bound(bound: Option<f64>) -> FilterResult<Option<f64>> {
    match bound {
        Some(value) if !value.is_finite() => {
            log_debug!("Rejected non-finite bound {}", value);
            Err(FilterError::InvalidBound { value })
        }
        _ => Ok(bound),
    }
}

impl Predicate for NumericFilter {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn matches(&self, value: &SensorValue) -> bool {
        let value = match value.as_number() {
            Some(n) if !n.is_nan() => n,
            _ => return true,
        };

        match self.operator {
            NumericOperator::Between => {
                let below = self.min.map_or(false, |min| value < min);
                let above = self.max.map_or(false, |max| value > max);
                !(below || above)
            }
            NumericOperator::Greater => self.min.map_or(true, |min| value > min),
            NumericOperator::Less => self.max.map_or(true, |max| value < max),
            NumericOperator::Equal => self.min.map_or(true, |target| value == target),
            NumericOperator::Unrecognized => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(filter: &NumericFilter, value: impl Into<SensorValue>) -> bool {
        filter.accepts(&value.into())
    }

    #[test]
    fn between_is_inclusive() {
        let filter = NumericFilter::active(NumericOperator::Between, Some(1.0), Some(10.0));
        assert!(accepts(&filter, 5.0));
        assert!(accepts(&filter, 1.0));
        assert!(accepts(&filter, 10.0));
        assert!(!accepts(&filter, 15.0));
        assert!(!accepts(&filter, 0.5));
    }

    #[test]
    fn between_open_sides() {
        let filter = NumericFilter::active(NumericOperator::Between, None, Some(10.0));
        assert!(accepts(&filter, 5.0));
        assert!(accepts(&filter, -1e9));
        assert!(!accepts(&filter, 11.0));

        let filter = NumericFilter::active(NumericOperator::Between, Some(0.0), None);
        assert!(accepts(&filter, 0.0));
        assert!(accepts(&filter, 1e9));
        assert!(!accepts(&filter, -0.1));
    }

    #[test]
    fn greater_is_strict() {
        let filter = NumericFilter::active(NumericOperator::Greater, Some(20.0), None);
        assert!(accepts(&filter, 20.5));
        assert!(!accepts(&filter, 20.0));
        assert!(!accepts(&filter, 3.0));
    }

    #[test]
    fn greater_without_min_passes() {
        let filter = NumericFilter::active(NumericOperator::Greater, None, Some(5.0));
        assert!(accepts(&filter, -1000.0));
        assert!(accepts(&filter, 1000.0));
    }

    #[test]
    fn less_is_strict() {
        let filter = NumericFilter::active(NumericOperator::Less, None, Some(20.0));
        assert!(accepts(&filter, 19.9));
        assert!(!accepts(&filter, 20.0));

        let unbounded = NumericFilter::active(NumericOperator::Less, Some(1.0), None);
        assert!(accepts(&unbounded, 1e12));
    }

    #[test]
    fn equal_uses_min_as_target() {
        let filter = NumericFilter::active(NumericOperator::Equal, Some(3.0), Some(100.0));
        assert!(accepts(&filter, 3.0));
        assert!(accepts(&filter, "3"));
        assert!(!accepts(&filter, 3.5));

        let no_target = NumericFilter::active(NumericOperator::Equal, None, None);
        assert!(accepts(&no_target, 42.0));
    }

    #[test]
    fn zero_bound_is_a_bound() {
        let filter = NumericFilter::active(NumericOperator::Greater, Some(0.0), None);
        assert!(!accepts(&filter, -1.0));
        assert!(!accepts(&filter, 0.0));
    }

    #[test]
    fn non_numeric_values_pass() {
        let filter = NumericFilter::active(NumericOperator::Between, Some(1.0), Some(2.0));
        assert!(accepts(&filter, "offline"));
        assert!(accepts(&filter, ""));
        assert!(accepts(&filter, f64::NAN));
    }

    #[test]
    fn coerces_text_and_bools() {
        let filter = NumericFilter::active(NumericOperator::Between, Some(1.0), Some(2.0));
        assert!(accepts(&filter, "1.5"));
        assert!(!accepts(&filter, "7"));
        assert!(accepts(&filter, true));
        assert!(!accepts(&filter, false));
    }

    #[test]
    fn unrecognized_operator_passes() {
        let filter = NumericFilter::active(NumericOperator::Unrecognized, Some(1.0), Some(2.0));
        assert!(accepts(&filter, 100.0));
    }

    #[test]
    fn disabled_passes_everything() {
        let mut filter = NumericFilter::active(NumericOperator::Equal, Some(1.0), None);
        filter.disable();
        assert!(accepts(&filter, 99.0));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let mut filter = NumericFilter::new();
        assert_eq!(
            filter.set_min(Some(f64::INFINITY)),
            Err(FilterError::InvalidBound { value: f64::INFINITY })
        );
        assert!(filter.set_max(Some(f64::NAN)).is_err());

        filter.set_min(Some(1.0)).unwrap();
        assert!(filter.set_bounds(Some(0.0), Some(f64::NAN)).is_err());
        assert_eq!(filter.min, Some(1.0));
    }

    #[test]
    fn fit_range_orders_bounds() {
        let mut filter = NumericFilter::new();
        filter.fit_range(30.0, 10.0).unwrap();
        assert_eq!((filter.min, filter.max), (Some(10.0), Some(30.0)));

        filter.clear_bounds();
        assert_eq!((filter.min, filter.max), (None, None));
    }

    #[test]
    fn operator_json() {
        let filter: NumericFilter =
            serde_json::from_str(r#"{"enabled": true, "operator": "greater", "min": 2}"#).unwrap();
        assert_eq!(filter.operator, NumericOperator::Greater);
        assert_eq!(filter.min, Some(2.0));

        let filter: NumericFilter = serde_json::from_str(r#"{"enabled": true, "operator": "around"}"#).unwrap();
        assert_eq!(filter.operator, NumericOperator::Unrecognized);

        let filter: NumericFilter = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert_eq!(filter.operator, NumericOperator::Unrecognized);
        assert!(filter.accepts(&SensorValue::from(-5.0)));
    }
}
