//! Common test utilities for integration tests
//!
//! Provides a deterministic stand-in for the dashboard's synthetic telemetry
//! stream: one generator per sensor kind, seeded so failures reproduce.

#![allow(dead_code)]

use sensorboard_core::{DataPoint, SensorValue, Timestamp};

/// Deterministic telemetry generator
pub struct TelemetryGenerator {
    seed: u32,
    timestamp: Timestamp,
    interval_ms: u64,
}

impl TelemetryGenerator {
    /// Create a generator emitting one point per `interval_ms`
    pub fn new(interval_ms: u64) -> Self {
        Self {
            seed: 42,
            timestamp: 0,
            interval_ms,
        }
    }

    /// Numeric readings around `base` with +/- `spread` noise
    pub fn numeric_series(&mut self, base: f64, spread: f64, count: usize) -> Vec<DataPoint> {
        (0..count)
            .map(|_| {
                let noise = (self.random_float() * 2.0 - 1.0) * spread;
                self.point(SensorValue::Number(base + noise))
            })
            .collect()
    }

    /// Boolean readings; every third one arrives as 0/1 like a raw GPIO feed
    pub fn boolean_series(&mut self, count: usize) -> Vec<DataPoint> {
        (0..count)
            .map(|i| {
                let state = self.random_float() < 0.5;
                let value = if i % 3 == 0 {
                    SensorValue::Number(if state { 1.0 } else { 0.0 })
                } else {
                    SensorValue::Bool(state)
                };
                self.point(value)
            })
            .collect()
    }

    /// Labels drawn from `categories`
    pub fn categorical_series(&mut self, categories: &[&str], count: usize) -> Vec<DataPoint> {
        (0..count)
            .map(|_| {
                let idx = (self.random_float() * categories.len() as f64) as usize;
                let label = categories[idx.min(categories.len() - 1)];
                self.point(SensorValue::from(label))
            })
            .collect()
    }

    fn point(&mut self, value: SensorValue) -> DataPoint {
        let point = DataPoint {
            timestamp: self.timestamp,
            value,
        };
        self.timestamp += self.interval_ms;
        point
    }

    /// Linear congruential generator in [0, 1)
    fn random_float(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((self.seed >> 16) & 0x7fff) as f64 / 32_768.0
    }
}

/// Assortment of values covering every representation
pub fn mixed_values() -> Vec<SensorValue> {
    vec![
        SensorValue::Number(0.0),
        SensorValue::Number(-0.0),
        SensorValue::Number(1.0),
        SensorValue::Number(-1000.0),
        SensorValue::Number(1e12),
        SensorValue::Number(f64::NAN),
        SensorValue::Number(f64::INFINITY),
        SensorValue::Bool(true),
        SensorValue::Bool(false),
        SensorValue::from("Auto"),
        SensorValue::from("42"),
        SensorValue::from(""),
    ]
}
