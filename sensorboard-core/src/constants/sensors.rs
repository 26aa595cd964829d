//! Sensor Classification Tables
//!
//! Identifiers are matched exactly and case-sensitively. Anything not listed
//! here is treated as a numeric sensor.

// ===== BOOLEAN SENSORS =====

/// Sensors reporting on/off state.
///
/// These may surface as `true`/`false` or as `0`/`1` depending on the
/// transport, so the boolean filter accepts both.
pub const BOOLEAN_SENSORS: &[&str] = &[
    "motion_detected",
    "door_open",
    "window_open",
    "proximity_alert",
    "emergency_stop",
    "alarm_active",
    "fault_detected",
    "smoke_detected",
    "leak_detected",
    "power_on",
];

// ===== CATEGORICAL SENSORS =====

/// Sensors reporting one label out of a small fixed set.
///
/// `shift_pattern` and `product_variant` have no curated list and use
/// `PLACEHOLDER_CATEGORIES`.
pub const CATEGORICAL_SENSORS: &[&str] = &[
    "operation_mode",
    "system_status",
    "machine_state",
    "process_phase",
    "quality_grade",
    "alert_level",
    "connection_state",
    "shift_pattern",
    "product_variant",
];

/// Curated category universes, in display order.
pub const CATEGORY_VALUES: &[(&str, &[&str])] = &[
    ("operation_mode", &["Auto", "Manual", "Maintenance", "Off"]),
    ("system_status", &["Online", "Offline", "Degraded", "Error"]),
    ("machine_state", &["Idle", "Running", "Paused", "Stopped"]),
    ("process_phase", &["Heating", "Cooling", "Mixing", "Holding"]),
    ("quality_grade", &["A", "B", "C", "Reject"]),
    ("alert_level", &["Normal", "Warning", "Critical"]),
    ("connection_state", &["Connected", "Disconnected", "Reconnecting"]),
];

/// Universe used for categorical sensors without a curated list.
pub const PLACEHOLDER_CATEGORIES: &[&str] = &["Category A", "Category B", "Category C"];

/// Look up the curated category list for a sensor.
pub fn category_values(sensor: &str) -> Option<&'static [&'static str]> {
    CATEGORY_VALUES
        .iter()
        .find(|(id, _)| *id == sensor)
        .map(|(_, values)| *values)
}
