//! Basic Filtering
//!
//! Walks one widget per sensor kind through the filter lifecycle:
//! classify, build the default, edit, evaluate a short stream.
//!
//! Run with: cargo run --example 01_basic_filtering

use sensorboard_core::{DataPoint, FilterEngine, NumericOperator, SensorValue, SeriesWindow};

fn main() -> Result<(), sensorboard_core::FilterError> {
    let engine = FilterEngine::new();

    // Numeric: seed the range from the data, then keep only hot readings
    let mut window: SeriesWindow<8> = SeriesWindow::new();
    for (t, v) in [21.0, 22.5, 27.1, 19.8, 30.2, 24.0].iter().enumerate() {
        window.push(DataPoint::new(t as u64 * 1000, *v));
    }

    let mut temperature = engine.bind("temperature");
    let filter = temperature.filter_mut().as_numeric_mut()?;
    window.fit_filter(filter)?;
    println!("temperature range: {:?} .. {:?}", filter.min, filter.max);

    filter.set_operator(NumericOperator::Greater);
    filter.set_min(Some(25.0))?;
    filter.enable();

    for point in window.visible(temperature.filter()) {
        println!("  t={}ms {}", point.timestamp, point.value);
    }

    // Boolean: hide idle readings, including raw 0 from the GPIO bridge
    let mut motion = engine.bind("motion_detected");
    let filter = motion.filter_mut().as_boolean_mut()?;
    filter.set_show_false(false);
    filter.enable();

    for value in [SensorValue::Bool(true), SensorValue::Number(0.0), SensorValue::Bool(false)] {
        println!("motion {} -> {}", value, if motion.evaluate(&value) { "shown" } else { "hidden" });
    }

    // Categorical: show only automatic operation
    let mut mode = engine.bind("operation_mode");
    let filter = mode.filter_mut().as_categorical_mut()?;
    filter.clear_selection();
    filter.select("Auto")?;
    filter.enable();

    for label in ["Auto", "Manual", "Off"] {
        println!("mode {} -> {}", label, mode.evaluate(&SensorValue::from(label)));
    }

    Ok(())
}
