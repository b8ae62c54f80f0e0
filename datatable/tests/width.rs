mod common;

use common::Employee;
use datatable::width::{FALLBACK_WIDTH, column_width, infer_width};
use datatable::Column;

#[test]
fn test_patterns() {
    assert_eq!(infer_width("created_at"), 20);
    assert_eq!(infer_width("workEmail"), 32);
    assert_eq!(infer_width("full_name"), 24);
    assert_eq!(infer_width("leave_type"), 14);
    assert_eq!(infer_width("total_amount"), 14);
    assert_eq!(infer_width("id"), 8);
    assert_eq!(infer_width("notes"), FALLBACK_WIDTH);
}

#[test]
fn test_first_pattern_wins() {
    // Contains both "updated" and "name".
    assert_eq!(infer_width("updated_by_name"), 20);
    // Contains both "name" and "id".
    assert_eq!(infer_width("name_id"), 24);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(infer_width("EMAIL"), 32);
}

#[test]
fn test_explicit_width_and_clamps() {
    let explicit: Column<Employee> = Column::new("email", "Email").width(10);
    assert_eq!(column_width(&explicit), 10);

    let clamped: Column<Employee> = Column::new("email", "Email").max_width(20);
    assert_eq!(column_width(&clamped), 20);

    let raised: Column<Employee> = Column::new("id", "ID").min_width(12);
    assert_eq!(column_width(&raised), 12);
}
