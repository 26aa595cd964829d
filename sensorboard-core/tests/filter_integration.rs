//! Integration tests for the filter engine
//!
//! Drives filters the way the widget layer does: classify a sensor, build its
//! default, edit it, then feed a simulated stream through it.

mod common;

use sensorboard_core::{
    build_default, classify,
    constants::{BOOLEAN_SENSORS, CATEGORICAL_SENSORS},
    evaluate, DataPoint, DomainKind, Filter, FilterEngine, FilterError, NumericFilter,
    NumericOperator, Predicate, SensorCatalog, SensorValue, SeriesWindow,
};

use common::{mixed_values, TelemetryGenerator};

/// Samples per generated series
const SERIES_LENGTH: usize = 200;

/// Window size of a typical line chart
const CHART_WINDOW: usize = 64;

#[test]
fn every_table_member_classifies() {
    for sensor in BOOLEAN_SENSORS {
        assert_eq!(classify(sensor), DomainKind::Boolean, "{}", sensor);
    }
    for sensor in CATEGORICAL_SENSORS {
        assert_eq!(classify(sensor), DomainKind::Categorical, "{}", sensor);
    }
    for sensor in ["temperature", "humidity", "pressure", "OPERATION_MODE", "door"] {
        assert_eq!(classify(sensor), DomainKind::Numeric, "{}", sensor);
    }
}

#[test]
fn defaults_keep_every_value() {
    let sensors = BOOLEAN_SENSORS
        .iter()
        .chain(CATEGORICAL_SENSORS)
        .copied()
        .chain(["temperature", "unknown_sensor", ""]);

    for sensor in sensors {
        let kind = classify(sensor);
        let filter = build_default(kind, sensor);
        assert_eq!(filter.kind(), kind);
        for value in mixed_values() {
            assert!(evaluate(&value, &filter), "{} dropped {:?}", sensor, value);
        }
    }
}

#[test]
fn canonical_cases() {
    let between = Filter::from(NumericFilter::active(NumericOperator::Between, Some(1.0), Some(10.0)));
    assert!(evaluate(&SensorValue::from(5.0), &between));
    assert!(!evaluate(&SensorValue::from(15.0), &between));

    let open_low = Filter::from(NumericFilter::active(NumericOperator::Between, None, Some(10.0)));
    assert!(evaluate(&SensorValue::from(5.0), &open_low));

    let greater = Filter::from(NumericFilter::active(NumericOperator::Greater, None, None));
    assert!(evaluate(&SensorValue::from(-1000.0), &greater));

    let mut door = build_default(DomainKind::Boolean, "door_open");
    door.enable();
    door.as_boolean_mut().unwrap().set_show_true(false);
    assert!(!evaluate(&SensorValue::Bool(true), &door));

    let mut motion = build_default(DomainKind::Boolean, "motion_detected");
    motion.enable();
    motion.as_boolean_mut().unwrap().set_show_false(false);
    assert!(!evaluate(&SensorValue::Number(0.0), &motion));

    let grades = Filter::from_json(
        r#"{"type": "categorical", "enabled": true, "selectedValues": ["A", "C"], "availableValues": ["A", "B", "C"]}"#,
    )
    .unwrap();
    assert!(!evaluate(&SensorValue::from("B"), &grades));
}

#[test]
fn numeric_widget_over_stream() {
    let engine = FilterEngine::new();
    let mut generator = TelemetryGenerator::new(1000);
    let mut window: SeriesWindow<CHART_WINDOW> = SeriesWindow::new();

    for point in generator.numeric_series(22.0, 3.0, SERIES_LENGTH) {
        window.push(point);
    }
    assert_eq!(window.len(), CHART_WINDOW);

    let mut temperature = engine.bind("temperature");
    let filter = temperature.filter_mut().as_numeric_mut().unwrap();
    assert!(window.fit_filter(filter).unwrap());
    let (lo, hi) = window.numeric_range().unwrap();
    assert!(lo >= 19.0 && hi <= 25.0);

    // Tighten to the upper half
    filter.set_operator(NumericOperator::Greater);
    filter.set_min(Some(22.0)).unwrap();
    filter.enable();

    let shown: Vec<&DataPoint> = window.visible(temperature.filter()).collect();
    assert!(!shown.is_empty());
    assert!(shown.len() < CHART_WINDOW);
    for point in &shown {
        assert!(point.value.as_number().unwrap() > 22.0);
    }
}

#[test]
fn boolean_widget_handles_gpio_style_values() {
    let engine = FilterEngine::new();
    let mut generator = TelemetryGenerator::new(500);
    let points = generator.boolean_series(SERIES_LENGTH);

    let mut alarm = engine.bind("alarm_active");
    let filter = alarm.filter_mut().as_boolean_mut().unwrap();
    filter.set_show_false(false);
    filter.enable();

    let kept: Vec<&DataPoint> = points.iter().filter(|p| alarm.evaluate(&p.value)).collect();
    assert!(!kept.is_empty());
    for point in kept {
        match &point.value {
            SensorValue::Bool(b) => assert!(*b),
            SensorValue::Number(n) => assert_eq!(*n, 1.0),
            other => panic!("unexpected value {:?}", other),
        }
    }
}

#[test]
fn categorical_widget_selection() {
    let engine = FilterEngine::new();
    let mut generator = TelemetryGenerator::new(1000);
    let points = generator.categorical_series(&["Auto", "Manual", "Maintenance", "Off"], SERIES_LENGTH);

    let mut mode = engine.bind("operation_mode");
    let filter = mode.filter_mut().as_categorical_mut().unwrap();
    filter.clear_selection();
    filter.select("Auto").unwrap();
    filter.enable();
    assert_eq!(
        filter.select("Turbo"),
        Err(FilterError::UnknownCategory { value: "Turbo".into() })
    );

    let kept: Vec<&DataPoint> = points.iter().filter(|p| mode.evaluate(&p.value)).collect();
    assert!(!kept.is_empty());
    assert!(kept.len() < SERIES_LENGTH);
    assert!(kept.iter().all(|p| p.value == SensorValue::from("Auto")));

    mode.filter_mut().as_categorical_mut().unwrap().clear_selection();
    assert!(points.iter().all(|p| !mode.evaluate(&p.value)));
}

#[test]
fn string_kind_is_handled_defensively() {
    let filter = build_default(DomainKind::String, "firmware_version");
    assert_eq!(filter.kind(), DomainKind::Numeric);
    for value in mixed_values() {
        assert!(evaluate(&value, &filter));
    }
}

#[test]
fn evaluation_is_idempotent() {
    let filter = Filter::from(NumericFilter::active(NumericOperator::Less, None, Some(0.5)));
    for value in mixed_values() {
        let first = evaluate(&value, &filter);
        for _ in 0..10 {
            assert_eq!(evaluate(&value, &filter), first);
        }
    }
}

#[test]
fn configured_catalog_end_to_end() {
    let catalog = SensorCatalog::from_json(
        r#"{
            "booleanSensors": ["conveyor_jam"],
            "categoricalSensors": ["recipe"],
            "categoryValues": {"recipe": ["Lager", "Stout", "IPA"]}
        }"#,
    )
    .unwrap();
    let engine = FilterEngine::with_tables(catalog);

    let mut recipe = engine.bind("recipe");
    let filter = recipe.filter_mut().as_categorical_mut().unwrap();
    assert_eq!(filter.available_values(), ["Lager", "Stout", "IPA"]);
    filter.deselect("IPA");
    filter.enable();

    assert!(recipe.evaluate(&SensorValue::from("Stout")));
    assert!(!recipe.evaluate(&SensorValue::from("IPA")));

    // Built-in names mean nothing to this catalog
    assert_eq!(engine.classify("door_open"), DomainKind::Numeric);
}

#[test]
fn persisted_widget_state_reattaches() {
    let engine = FilterEngine::new();
    let mut grade = engine.bind("quality_grade");
    {
        let filter = grade.filter_mut().as_categorical_mut().unwrap();
        filter.deselect("Reject");
        filter.enable();
    }

    let json = grade.filter().to_json().unwrap();
    let restored = Filter::from_json(&json).unwrap();
    let reattached = engine.attach("quality_grade", restored.clone()).unwrap();
    assert_eq!(reattached, grade);
    assert!(reattached.filter().is_enabled());

    assert_eq!(
        engine.attach("door_open", restored).unwrap_err(),
        FilterError::KindMismatch {
            expected: DomainKind::Boolean,
            found: DomainKind::Categorical,
        }
    );
}
