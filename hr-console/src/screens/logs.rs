//! Column sets for the log screens.

use datatable::{Align, Column, Content, FieldValue, JsonRecord, Tone};

use super::status_badge;

fn employee_column() -> Column<JsonRecord> {
    Column::new("employee.name", "Employee").sortable().filterable()
}

pub(super) fn attendance_columns() -> Vec<Column<JsonRecord>> {
    vec![
        employee_column(),
        Column::new("employee.department", "Department").sortable(),
        Column::new("date", "Date").sortable().width(12),
        Column::new("check_in", "In").width(6),
        Column::new("check_out", "Out").width(6),
        Column::new("hours", "Hours").sortable().width(6).align(Align::Right),
        Column::new("status", "Status").sortable().render(status_badge),
    ]
}

pub(super) fn leave_columns() -> Vec<Column<JsonRecord>> {
    vec![
        employee_column(),
        Column::new("leave_type", "Type").sortable(),
        Column::new("start_date", "From").sortable().width(12),
        Column::new("end_date", "To").width(12),
        Column::new("days", "Days").sortable().width(5).align(Align::Right),
        Column::new("status", "Status").sortable().render(status_badge),
    ]
}

pub(super) fn late_columns() -> Vec<Column<JsonRecord>> {
    vec![
        employee_column(),
        Column::new("date", "Date").sortable().width(12),
        Column::new("minutes_late", "Late by")
            .sortable()
            .width(8)
            .align(Align::Right)
            .render(|value, _, _| match value {
                FieldValue::Int(minutes) => {
                    let tone = if *minutes > 30 { Tone::Danger } else { Tone::Warning };
                    Content::toned(format!("{minutes} min"), tone)
                }
                other => datatable::render::default_cell(other),
            }),
        Column::new("reason", "Reason").max_width(30),
    ]
}

pub(super) fn salary_columns() -> Vec<Column<JsonRecord>> {
    vec![
        employee_column(),
        Column::new("month", "Month").sortable().width(8),
        Column::new("base_salary", "Base").sortable().align(Align::Right),
        Column::new("deductions", "Deductions").width(11).align(Align::Right),
        Column::new("net_amount", "Net").sortable().align(Align::Right),
        Column::new("paid", "Paid").width(5),
    ]
}
