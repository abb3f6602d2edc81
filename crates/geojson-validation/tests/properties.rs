//! Property tests over arbitrary JSON values.

use geojson_validation::{
    is_feature_collection, is_geojson_object, is_line_string, is_polygon, is_position,
    ValidationResult,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|n| json!(n)),
        prop_oneof![
            Just("Point".to_string()),
            Just("Polygon".to_string()),
            Just("Feature".to_string()),
            Just("FeatureCollection".to_string()),
            "[a-z]{0,6}",
        ]
        .prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    Just("type".to_string()),
                    Just("coordinates".to_string()),
                    Just("geometry".to_string()),
                    Just("features".to_string()),
                    Just("bbox".to_string()),
                    "[a-z]{1,4}",
                ],
                inner,
                0..5
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn position() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-180.0f64..180.0, 2..5)
}

proptest! {
    /// Boolean mode is true exactly when trace mode reports nothing.
    #[test]
    fn modes_agree(value in json_value()) {
        let flag = is_geojson_object(&value, false);
        let trace = is_geojson_object(&value, true);
        prop_assert_eq!(flag == ValidationResult::Bool(true), trace.errors().is_empty());
    }

    /// Re-validating the same value gives the same findings.
    #[test]
    fn idempotent(value in json_value()) {
        prop_assert_eq!(is_geojson_object(&value, true), is_geojson_object(&value, true));
        prop_assert_eq!(is_feature_collection(&value, true), is_feature_collection(&value, true));
    }

    /// A position is valid iff it is an array of at least two numbers.
    #[test]
    fn position_iff_numeric_array(value in json_value()) {
        let expected = value
            .as_array()
            .is_some_and(|items| items.len() >= 2 && items.iter().all(Value::is_number));
        prop_assert_eq!(is_position(&value, false).is_ok(), expected);
    }

    #[test]
    fn numeric_positions_pass(coords in position()) {
        prop_assert!(is_position(&json!(coords), false).is_ok());
    }

    /// Element `i` failing with `M` shows up as `at i: M`.
    #[test]
    fn index_prefix(mut line in prop::collection::vec(position(), 2..8), bad in any::<prop::sample::Index>()) {
        let i = bad.index(line.len());
        line[i] = vec![1.0];
        let value = json!({"type": "LineString", "coordinates": line});
        prop_assert_eq!(
            is_line_string(&value, true).into_errors(),
            vec![format!("at {i}: Position must be at least two elements")]
        );
    }

    /// Closing a ring by repeating its first position always satisfies closure.
    #[test]
    fn closed_rings_pass(mut ring in prop::collection::vec(position(), 3..8)) {
        ring.push(ring[0].clone());
        let value = json!({"type": "Polygon", "coordinates": [ring]});
        prop_assert!(is_polygon(&value, false).is_ok());
    }
}
