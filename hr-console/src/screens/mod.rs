//! Screens: one column configuration per HR record type.

mod logs;
mod requests;

use clap::ValueEnum;
use datatable::render::default_cell;
use datatable::{
    ColumnSet, Content, FieldValue, JsonRecord, RowActions, SortConfig, TableError, Tone,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Daily check-in/check-out logs
    Attendance,
    /// Leave taken
    Leave,
    /// Late arrivals
    Late,
    /// Monthly salary payments
    Salary,
    /// Requests awaiting HR review
    Requests,
    /// Module permissions per employee
    Permissions,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Attendance => "Attendance Logs",
            Screen::Leave => "Leave Logs",
            Screen::Late => "Late Logs",
            Screen::Salary => "Salary Logs",
            Screen::Requests => "HR Requests",
            Screen::Permissions => "Permissions",
        }
    }

    pub fn columns(self) -> Result<ColumnSet<JsonRecord>, TableError> {
        ColumnSet::new(match self {
            Screen::Attendance => logs::attendance_columns(),
            Screen::Leave => logs::leave_columns(),
            Screen::Late => logs::late_columns(),
            Screen::Salary => logs::salary_columns(),
            Screen::Requests => requests::request_columns(),
            Screen::Permissions => requests::permission_columns(),
        })
    }

    /// Fields searched on this screen.
    pub fn search_keys(self) -> &'static [&'static str] {
        match self {
            Screen::Attendance | Screen::Late => &["employee.name", "employee.department"],
            Screen::Leave => &["employee.name", "leave_type"],
            Screen::Salary => &["employee.name", "month"],
            Screen::Requests => &["employee.name", "type", "status"],
            Screen::Permissions => &["employee.name", "role", "module"],
        }
    }

    pub fn default_sort(self) -> Option<SortConfig> {
        match self {
            Screen::Attendance | Screen::Late => Some(SortConfig::desc("date")),
            Screen::Leave => Some(SortConfig::desc("start_date")),
            Screen::Salary => Some(SortConfig::desc("month")),
            Screen::Requests => Some(SortConfig::desc("submitted_at")),
            Screen::Permissions => None,
        }
    }

    /// Row actions for screens that have them.
    ///
    /// `on_decide` receives the action label and the record.
    pub fn actions(
        self,
        on_decide: impl Fn(&str, &JsonRecord) + Send + Sync + Clone + 'static,
    ) -> Option<RowActions<JsonRecord>> {
        match self {
            Screen::Requests => Some(requests::review_actions(on_decide)),
            _ => None,
        }
    }
}

/// Status text as a coloured badge.
pub(crate) fn status_badge(value: &FieldValue, _: &JsonRecord, _: usize) -> Content {
    let Some(status) = value.as_str() else {
        return default_cell(value);
    };
    let tone = match status.to_lowercase().as_str() {
        "approved" | "present" | "paid" | "active" => Tone::Success,
        "pending" | "late" | "half-day" => Tone::Warning,
        "rejected" | "absent" | "revoked" => Tone::Danger,
        _ => Tone::Default,
    };
    Content::badge(status, tone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> JsonRecord {
        JsonRecord::from_value(0, json!({"id": 1})).unwrap()
    }

    #[test]
    fn test_every_screen_has_valid_columns() {
        for screen in Screen::value_variants() {
            let columns = screen.columns().unwrap();
            assert!(!columns.is_empty(), "{screen:?}");
        }
    }

    #[test]
    fn test_status_badge_tones() {
        let badge = status_badge(&FieldValue::from("Approved"), &record(), 0);
        assert_eq!(badge, Content::badge("Approved", Tone::Success));
        let badge = status_badge(&FieldValue::from("pending"), &record(), 0);
        assert_eq!(badge, Content::badge("pending", Tone::Warning));
        assert_eq!(
            status_badge(&FieldValue::Null, &record(), 0),
            default_cell(&FieldValue::Null)
        );
    }

    #[test]
    fn test_only_requests_have_actions() {
        assert!(Screen::Requests.actions(|_, _| {}).is_some());
        assert!(Screen::Salary.actions(|_, _| {}).is_none());
    }
}
