//! Column sets for requests and permissions.

use datatable::{Action, ButtonVariant, Column, DataItem, JsonRecord, RowActions};

use super::status_badge;

pub(super) fn request_columns() -> Vec<Column<JsonRecord>> {
    vec![
        Column::new("id", "ID").sortable(),
        Column::new("employee.name", "Employee").sortable().filterable(),
        Column::new("type", "Type").sortable(),
        Column::new("submitted_at", "Submitted").sortable(),
        Column::new("status", "Status").sortable().render(status_badge),
        Column::new("note", "Note").max_width(28),
    ]
}

pub(super) fn permission_columns() -> Vec<Column<JsonRecord>> {
    vec![
        Column::new("employee.name", "Employee").sortable().filterable(),
        Column::new("role", "Role").sortable().width(12),
        Column::new("module", "Module").sortable().width(12),
        Column::new("can_view", "View").width(5),
        Column::new("can_edit", "Edit").width(5),
        Column::new("updated_at", "Updated").sortable(),
    ]
}

fn is_pending(record: &JsonRecord) -> bool {
    record
        .field("status")
        .as_str()
        .is_some_and(|s| s.eq_ignore_ascii_case("pending"))
}

/// Approve and reject buttons, enabled only while a request is pending.
pub(super) fn review_actions(
    on_decide: impl Fn(&str, &JsonRecord) + Send + Sync + Clone + 'static,
) -> RowActions<JsonRecord> {
    let approve = on_decide.clone();
    RowActions::Buttons(vec![
        Action::new("Approve", move |record: &JsonRecord, _| approve("Approve", record))
            .variant(ButtonVariant::Primary)
            .disabled_when(|record| !is_pending(record)),
        Action::new("Reject", move |record: &JsonRecord, _| on_decide("Reject", record))
            .variant(ButtonVariant::Danger)
            .disabled_when(|record| !is_pending(record)),
    ])
}
