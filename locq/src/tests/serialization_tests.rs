//! Tests for the serde wire representation

use crate::selector::{ControlType, PredicateKey};
use crate::Locator;

#[test]
fn locator_serializes_as_its_query_string() {
    let locator = Locator::button().and(Locator::name("Save As"));
    let json = serde_json::to_value(&locator).unwrap();
    assert_eq!(json, serde_json::json!("type:Button and name:\"Save As\""));
}

#[test]
fn predicate_keys_serialize_as_tags() {
    assert_eq!(
        serde_json::to_value(PredicateKey::Class).unwrap(),
        serde_json::json!("class")
    );

    let key: PredicateKey = serde_json::from_str("\"offset\"").unwrap();
    assert_eq!(key, PredicateKey::Offset);

    assert!(serde_json::from_str::<PredicateKey>("\"position\"").is_err());
}

#[test]
fn control_types_serialize_as_tags() {
    assert_eq!(
        serde_json::to_value(ControlType::Combobox).unwrap(),
        serde_json::json!("Combobox")
    );

    let control: ControlType = serde_json::from_str("\"Edit\"").unwrap();
    assert_eq!(control, ControlType::Edit);

    assert!(serde_json::from_str::<ControlType>("\"Unknown\"").is_err());
}
