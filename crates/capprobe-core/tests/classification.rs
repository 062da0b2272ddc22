//! Ordering and exclusivity of value classification.

use capprobe_core::{Classification, ProbeValue, classify};

#[test]
fn test_exactly_one_arm_per_input() {
    let cases = [
        (ProbeValue::Integer(42), "Positive integer: 42"),
        (ProbeValue::Integer(-3), "Non-positive integer: -3"),
        (ProbeValue::Text("hello".to_string()), "String: hello"),
        (ProbeValue::Null, "Null value"),
        (ProbeValue::Float(3.25), "Unknown type"),
    ];

    for (value, expected) in cases {
        assert_eq!(classify(&value).to_string(), expected, "input {value:?}");
    }
}

#[test]
fn test_guarded_arm_wins_over_plain_integer() {
    for i in [1, 2, i64::MAX] {
        assert_eq!(
            classify(&ProbeValue::Integer(i)),
            Classification::PositiveInteger(i)
        );
    }
    for i in [0, -1, i64::MIN] {
        assert_eq!(
            classify(&ProbeValue::Integer(i)),
            Classification::NonPositiveInteger(i)
        );
    }
}

#[test]
fn test_numeric_looking_text_stays_text() {
    // Classification works on the variant, never re-parses text.
    assert_eq!(
        classify(&ProbeValue::Text("42".to_string())),
        Classification::Text("42".to_string())
    );
}
