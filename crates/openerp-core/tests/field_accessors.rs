use openerp_core::{FieldMetadata, FieldType, Properties, Value};
use std::sync::Arc;

fn field(entries: &[(&str, Value)]) -> FieldMetadata {
    let properties: Properties = entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    FieldMetadata::new("partner_id", properties)
}

#[test]
fn reads_present_properties() {
    let field = field(&[
        ("type", Value::from("many2one")),
        ("string", Value::from("Customer")),
        ("required", Value::from(true)),
        ("selectable", Value::from(false)),
        ("size", Value::from(128i64)),
        ("help", Value::from("Invoiced partner")),
        ("store", Value::from(false)),
        ("func_method", Value::from(true)),
        ("relation", Value::from("res.partner")),
        ("readonly", Value::from(true)),
    ]);

    assert_eq!(field.name(), "partner_id");
    assert_eq!(field.ty().unwrap(), FieldType::ManyToOne);
    assert_eq!(field.description().unwrap().as_deref(), Some("Customer"));
    assert!(field.required().unwrap());
    assert!(!field.selectable().unwrap());
    assert_eq!(field.size().unwrap(), 128);
    assert_eq!(field.help().unwrap().as_deref(), Some("Invoiced partner"));
    assert!(!field.store().unwrap());
    assert!(field.func_method().unwrap());
    assert_eq!(field.relation().unwrap(), "res.partner");
    assert!(field.readonly().unwrap());
}

// ---------------------------------------------------------------------------
// readonly
// ---------------------------------------------------------------------------

#[test]
fn readonly_bool() {
    assert!(field(&[("readonly", Value::Bool(true))]).readonly().unwrap());
    assert!(!field(&[("readonly", Value::Bool(false))]).readonly().unwrap());
}

#[test]
fn readonly_integer() {
    assert!(field(&[("readonly", Value::I64(1))]).readonly().unwrap());
    assert!(!field(&[("readonly", Value::I64(0))]).readonly().unwrap());
}

#[test]
fn readonly_integer_other_than_one_is_false() {
    assert!(!field(&[("readonly", Value::I64(2))]).readonly().unwrap());
    assert!(!field(&[("readonly", Value::I64(-1))]).readonly().unwrap());
}

#[test]
fn readonly_string_is_error() {
    let err = field(&[("readonly", Value::from("1"))]).readonly().unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn integer_coercion_is_readonly_only() {
    let field = field(&[
        ("required", Value::I64(1)),
        ("store", Value::I64(0)),
        ("selectable", Value::I64(1)),
        ("func_method", Value::I64(1)),
    ]);

    assert!(field.required().is_err());
    assert!(field.store().is_err());
    assert!(field.selectable().is_err());
    assert!(field.func_method().is_err());
}

// ---------------------------------------------------------------------------
// Type mismatches
// ---------------------------------------------------------------------------

#[test]
fn required_as_text_is_error() {
    let err = field(&[("required", Value::from("true"))])
        .required()
        .unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "property `required` of field `partner_id`: cannot convert String to bool"
    );
}

#[test]
fn size_as_text_is_error() {
    let err = field(&[("size", Value::from("64"))]).size().unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "property `size` of field `partner_id`: cannot convert String to i32"
    );
}

#[test]
fn size_out_of_range_is_error() {
    let err = field(&[("size", Value::I64(i64::MAX))]).size().unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn help_as_bool_is_error() {
    // Servers that send `false` for an unset help text are not normalized.
    let err = field(&[("help", Value::Bool(false))]).help().unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn relation_as_list_is_error() {
    let err = field(&[("relation", Value::List(vec![]))])
        .relation()
        .unwrap_err();
    assert!(err.is_type_conversion());
}

// ---------------------------------------------------------------------------
// Raw properties
// ---------------------------------------------------------------------------

#[test]
fn property_returns_stored_value() {
    let digits = Value::List(vec![Value::I64(16), Value::I64(2)]);
    let field = field(&[("digits", digits.clone()), ("translate", Value::Bool(true))]);

    assert_eq!(field.property("digits"), Some(&digits));
    assert_eq!(field.property("translate"), Some(&Value::Bool(true)));
}

#[test]
fn property_absent_is_none() {
    assert_eq!(field(&[]).property("arbitraryKey"), None);
}

#[test]
fn properties_are_shared_not_copied() {
    let mut properties = Properties::new();
    properties.insert("type".to_string(), Value::from("date"));
    let properties = Arc::new(properties);

    let field = FieldMetadata::new("date_order", properties.clone());

    assert!(std::ptr::eq(field.properties(), &*properties));
    assert_eq!(Arc::strong_count(&properties), 2);
}

#[test]
fn same_name_distinct_mappings_are_independent() {
    let a = FieldMetadata::new("state", {
        let mut properties = Properties::new();
        properties.insert("required".to_string(), Value::Bool(true));
        properties
    });
    let b = FieldMetadata::new("state", Properties::new());

    assert_eq!(a.name(), b.name());
    assert!(a.required().unwrap());
    assert!(!b.required().unwrap());
    assert_eq!(b.property("required"), None);
}

#[test]
fn repeated_reads_agree() {
    let field = field(&[("size", Value::I64(12))]);
    assert_eq!(field.size().unwrap(), field.size().unwrap());
}
