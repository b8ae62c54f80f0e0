mod common;

use common::{Employee, employee};
use datatable::render::{PLACEHOLDER, cell, default_cell, header};
use datatable::{Column, Content, FieldValue, SortConfig, Tone};
use serde_json::json;

#[test]
fn test_null_is_placeholder() {
    assert_eq!(
        default_cell(&FieldValue::Null),
        Content::Placeholder(PLACEHOLDER.to_string())
    );
}

#[test]
fn test_bool_badges() {
    assert_eq!(
        default_cell(&FieldValue::Bool(true)),
        Content::badge("Yes", Tone::Success)
    );
    assert_eq!(
        default_cell(&FieldValue::Bool(false)),
        Content::badge("No", Tone::Muted)
    );
}

#[test]
fn test_numbers_are_grouped() {
    assert_eq!(default_cell(&FieldValue::Int(1234567)).plain_text(), "1,234,567");
    assert_eq!(default_cell(&FieldValue::Float(4500.5)).plain_text(), "4,500.5");
}

#[test]
fn test_long_text_truncated_with_title() {
    let long = "x".repeat(60);
    let content = default_cell(&FieldValue::Text(long.clone()));
    assert_eq!(content.plain_text().chars().count(), 51);
    assert!(content.plain_text().ends_with('…'));
    assert_eq!(content.title(), Some(long.as_str()));
}

#[test]
fn test_short_text_has_no_title() {
    let content = default_cell(&FieldValue::from("short"));
    assert_eq!(content, Content::text("short"));
    assert_eq!(content.title(), None);
}

#[test]
fn test_objects_stringified_and_truncated() {
    let small = default_cell(&FieldValue::from(json!({"a": 1})));
    assert_eq!(small.plain_text(), r#"{"a":1}"#);

    let big = default_cell(&FieldValue::from(json!({"description": "a fairly long nested value"})));
    assert_eq!(big.plain_text().chars().count(), 31);
    assert!(big.title().is_some());
}

#[test]
fn test_custom_renderer_wins() {
    let column: Column<Employee> = Column::new("salary", "Salary")
        .render(|value: &FieldValue, item: &Employee, _| {
            Content::text(format!("{} for {}", value.search_text(), item.name))
        });
    let content = cell(&column, &employee(2, "Bob", "Sales"), 0);
    assert_eq!(content.plain_text(), "2000 for Bob");
}

#[test]
fn test_accessor_feeds_renderer() {
    let column: Column<Employee> = Column::new("initial", "Initial")
        .accessor(|e: &Employee| FieldValue::from(e.name.chars().next().map(String::from)));
    let content = cell(&column, &employee(1, "Alice", "Eng"), 0);
    assert_eq!(content.plain_text(), "A");
}

#[test]
fn test_renderer_receives_window_index() {
    let column: Column<Employee> =
        Column::new("name", "Name").render(|_: &FieldValue, _: &Employee, index| {
            Content::text(index.to_string())
        });
    assert_eq!(cell(&column, &employee(1, "Alice", "Eng"), 4).plain_text(), "4");
}

#[test]
fn test_sortable_header_shows_indicator() {
    let column: Column<Employee> = Column::new("name", "Name").sortable();
    let sort = SortConfig::asc("name");
    assert_eq!(header(&column, Some(&sort)).plain_text(), "Name ↑");
    assert_eq!(header(&column, None).plain_text(), "Name ↕");
}

#[test]
fn test_plain_header_and_override() {
    let plain: Column<Employee> = Column::new("email", "Email");
    assert_eq!(header(&plain, None), Content::text("Email"));

    let custom: Column<Employee> = Column::new("email", "Email")
        .sortable()
        .header_render(|c: &Column<Employee>, _| {
            Content::toned(c.label.to_uppercase(), Tone::Primary)
        });
    assert_eq!(header(&custom, None), Content::toned("EMAIL", Tone::Primary));
}

#[test]
fn test_header_override_sees_current_sort() {
    let column: Column<Employee> = Column::new("name", "Name").sortable().header_render(
        |c: &Column<Employee>, sort: Option<&SortConfig>| {
            let arrow = match datatable::sort::direction_for(sort, &c.key) {
                Some(direction) => direction.glyph(),
                None => "",
            };
            Content::text(format!("{}{arrow}", c.label))
        },
    );
    assert_eq!(header(&column, None), Content::text("Name"));
    assert_eq!(
        header(&column, Some(&SortConfig::desc("name"))),
        Content::text("Name↓")
    );
    assert_eq!(
        header(&column, Some(&SortConfig::asc("email"))),
        Content::text("Name")
    );
}
