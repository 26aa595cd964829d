//! Category selection filter
//!
//! The filter owns a fixed universe (`available_values`) and the subset of it
//! the user wants to see (`selected_values`). The selection is kept in
//! universe order so legends render consistently no matter the click order.
//!
//! An empty selection is a real state ("none selected") and hides every
//! reading while the filter is enabled.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::errors::{FilterError, FilterResult};
use crate::traits::Predicate;
use crate::value::SensorValue;

/// Subset-of-universe filter for categorical sensors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalFilter {
    /// Whether the predicate is active
    #[serde(default)]
    pub enabled: bool,

    selected_values: Vec<String>,

    available_values: Vec<String>,
}

impl CategoricalFilter {
    /// Create a disabled filter over `available`, with everything selected
    ///
    /// Duplicate categories are dropped, keeping the first occurrence.
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let available = dedup(available.into_iter().map(Into::into));
        Self {
            enabled: false,
            selected_values: available.clone(),
            available_values: available,
        }
    }

    /// Create an enabled filter with an explicit selection
    pub fn active<I, S, J, T>(available: I, selected: J) -> FilterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut filter = Self::new(available);
        filter.enabled = true;
        filter.selected_values.clear();
        for value in selected {
            filter.select(value.as_ref())?;
        }
        Ok(filter)
    }

    /// Enable the filter
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable the filter
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Categories currently shown, in universe order
    pub fn selected_values(&self) -> &[String] {
        &self.selected_values
    }

    /// The fixed universe of categories
    pub fn available_values(&self) -> &[String] {
        &self.available_values
    }

    /// Check whether a category is selected
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_values.iter().any(|v| v == value)
    }

    /// Check whether a category is part of the universe
    pub fn is_available(&self, value: &str) -> bool {
        self.available_values.iter().any(|v| v == value)
    }

    /// Add a category to the selection
    pub fn select(&mut self, value: &str) -> FilterResult<()> {
        if !self.is_available(value) {
            log_debug!("Rejected selection of unknown category {}", value);
            return Err(FilterError::UnknownCategory {
                value: value.to_string(),
            });
        }
        if self.is_selected(value) {
            return Ok(());
        }

        let selected = &self.selected_values;
        self.selected_values = self
            .available_values
            .iter()
            .filter(|v| v.as_str() == value || selected.contains(*v))
            .cloned()
            .collect();
        Ok(())
    }

    /// Remove a category from the selection; returns whether it was selected
    pub fn deselect(&mut self, value: &str) -> bool {
        let before = self.selected_values.len();
        self.selected_values.retain(|v| v != value);
        self.selected_values.len() != before
    }

    /// Flip a category; returns whether it is selected afterwards
    pub fn toggle(&mut self, value: &str) -> FilterResult<bool> {
        if self.deselect(value) {
            Ok(false)
        } else {
            self.select(value)?;
            Ok(true)
        }
    }

    /// Select the whole universe
    pub fn select_all(&mut self) {
        self.selected_values = self.available_values.clone();
    }

    /// Deselect everything
    pub fn clear_selection(&mut self) {
        self.selected_values.clear();
    }

    /// Check the selection is a subset of the universe
    pub fn validate(&self) -> FilterResult<()> {
        match self.selected_values.iter().find(|v| !self.is_available(v)) {
            Some(value) => Err(FilterError::UnknownCategory {
                value: value.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Drop duplicates and put the selection back in universe order
    pub fn normalize(&mut self) {
        self.available_values = dedup(self.available_values.drain(..));
        let selected = &self.selected_values;
        self.selected_values = self
            .available_values
            .iter()
            .filter(|v| selected.contains(*v))
            .cloned()
            .collect();
    }
}

fn dedup(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

impl Predicate for CategoricalFilter {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn matches(&self, value: &SensorValue) -> bool {
        let label = value.label();
        self.is_selected(&label)
    }
}
