//! Custom Sensor Catalog
//!
//! Loads deployment-specific sensor tables from JSON and shows how unknown
//! categorical sensors fall back to the placeholder universe.
//!
//! Run with: cargo run --example 02_custom_catalog

use sensorboard_core::{FilterEngine, Predicate, SensorCatalog, SensorValue};

const CATALOG: &str = r#"{
    "booleanSensors": ["conveyor_jam", "hopper_empty"],
    "categoricalSensors": ["recipe", "crew"],
    "categoryValues": {
        "recipe": ["Lager", "Stout", "IPA"]
    },
    "placeholderValues": ["Shift 1", "Shift 2", "Shift 3"]
}"#;

fn main() -> Result<(), sensorboard_core::FilterError> {
    let engine = FilterEngine::with_tables(SensorCatalog::from_json(CATALOG)?);

    for sensor in ["conveyor_jam", "recipe", "crew", "line_speed"] {
        let filter = engine.default_filter(sensor);
        println!("{:<14} {:<12} {}", sensor, engine.classify(sensor), filter.to_json()?);
    }

    let mut recipe = engine.bind("recipe");
    let filter = recipe.filter_mut().as_categorical_mut()?;
    filter.toggle("IPA")?;
    filter.enable();
    println!("recipe filter enabled: {}", recipe.filter().is_enabled());

    for label in ["Lager", "IPA"] {
        println!("recipe {} -> {}", label, recipe.evaluate(&SensorValue::from(label)));
    }

    Ok(())
}
