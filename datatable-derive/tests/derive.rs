//! Tests for #[derive(DataItem)].

use chrono::NaiveDate;
use datatable::{DataItem, FieldValue};

#[derive(Debug, Clone, DataItem)]
struct Employee {
    id: u32,
    name: String,
    #[data(rename = "email")]
    work_email: String,
    salary: Option<f64>,
    active: bool,
    hired: NaiveDate,
    #[data(skip)]
    #[allow(dead_code)]
    password_hash: String,
}

#[derive(Debug, Clone, DataItem)]
struct LeaveRequest {
    #[data(id)]
    reference: String,
    days: i32,
    tags: Vec<String>,
}

fn alice() -> Employee {
    Employee {
        id: 7,
        name: "Alice".to_string(),
        work_email: "alice@acme.test".to_string(),
        salary: None,
        active: true,
        hired: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
        password_hash: "secret".to_string(),
    }
}

#[test]
fn test_id_field_by_name() {
    assert_eq!(alice().id(), 7);
}

#[test]
fn test_fields_by_key() {
    let a = alice();
    assert_eq!(a.field("id"), FieldValue::Int(7));
    assert_eq!(a.field("name"), FieldValue::Text("Alice".to_string()));
    assert_eq!(a.field("active"), FieldValue::Bool(true));
    assert_eq!(a.field("hired"), FieldValue::Text("2021-03-14".to_string()));
}

#[test]
fn test_rename_replaces_key() {
    let a = alice();
    assert_eq!(
        a.field("email"),
        FieldValue::Text("alice@acme.test".to_string())
    );
    assert_eq!(a.field("work_email"), FieldValue::Null);
}

#[test]
fn test_skipped_and_unknown_fields_are_null() {
    let a = alice();
    assert_eq!(a.field("password_hash"), FieldValue::Null);
    assert_eq!(a.field("nope"), FieldValue::Null);
}

#[test]
fn test_option_none_is_null() {
    assert!(alice().field("salary").is_null());
}

#[test]
fn test_marked_id_field() {
    let request = LeaveRequest {
        reference: "LV-001".to_string(),
        days: 3,
        tags: vec!["annual".to_string()],
    };
    assert_eq!(request.id(), "LV-001");
    assert_eq!(request.field("days"), FieldValue::Int(3));
    assert_eq!(
        request.field("tags"),
        FieldValue::Other(serde_json::json!(["annual"]))
    );
}
