//! Built-in sample records, used when no `--data` file is given.

use serde_json::{Value, json};

use crate::screens::Screen;

const EMPLOYEES: &[(&str, &str)] = &[
    ("Amira Haddad", "Engineering"),
    ("Ben Okafor", "Finance"),
    ("Chloé Martin", "Engineering"),
    ("Daniel Kim", "Operations"),
    ("Eva Novak", "People"),
    ("Farid Rahimi", "Sales"),
    ("Grace Liu", "Engineering"),
    ("Hugo Silva", "Support"),
];

fn employee(n: usize) -> Value {
    let (name, department) = EMPLOYEES[n % EMPLOYEES.len()];
    let email = name.to_lowercase().replace(' ', ".").replace('é', "e");
    json!({
        "name": name,
        "department": department,
        "email": format!("{email}@hrdesk.example"),
    })
}

/// Day `n` of March 2026, as `YYYY-MM-DD`.
fn day(n: usize) -> String {
    format!("2026-03-{:02}", n % 28 + 1)
}

pub fn records(screen: Screen) -> Vec<Value> {
    match screen {
        Screen::Attendance => attendance(),
        Screen::Leave => leave(),
        Screen::Late => late(),
        Screen::Salary => salary(),
        Screen::Requests => requests(),
        Screen::Permissions => permissions(),
    }
}

fn attendance() -> Vec<Value> {
    (0..24)
        .map(|i| {
            let absent = i % 11 == 5;
            let late = i % 4 == 1;
            let check_in = match (absent, late) {
                (true, _) => Value::Null,
                (false, true) => json!("09:42"),
                (false, false) => json!("08:55"),
            };
            json!({
                "id": i + 1,
                "employee": employee(i),
                "date": day(i / 3),
                "check_in": check_in,
                "check_out": if absent { Value::Null } else { json!("17:30") },
                "hours": if absent { json!(0) } else if late { json!(7.8) } else { json!(8.58) },
                "status": if absent { "Absent" } else if late { "Late" } else { "Present" },
            })
        })
        .collect()
}

fn leave() -> Vec<Value> {
    const TYPES: &[&str] = &["Annual", "Sick", "Unpaid", "Parental"];
    const STATUSES: &[&str] = &["Approved", "Pending", "Rejected"];
    (0..14)
        .map(|i| {
            let days = i % 5 + 1;
            json!({
                "id": 100 + i,
                "employee": employee(i + 2),
                "leave_type": TYPES[i % TYPES.len()],
                "start_date": day(i * 2),
                "end_date": day(i * 2 + days - 1),
                "days": days,
                "status": STATUSES[i % STATUSES.len()],
            })
        })
        .collect()
}

fn late() -> Vec<Value> {
    const REASONS: &[&str] = &[
        "Traffic",
        "Train delayed after signal failure near the central station",
        "Doctor appointment",
    ];
    (0..12)
        .map(|i| {
            json!({
                "id": 200 + i,
                "employee": employee(i * 3),
                "date": day(i),
                "minutes_late": 5 + (i * 17) % 55,
                "reason": if i % 4 == 3 { Value::Null } else { json!(REASONS[i % REASONS.len()]) },
            })
        })
        .collect()
}

fn salary() -> Vec<Value> {
    (0..16)
        .map(|i| {
            let base = 3200 + (i % EMPLOYEES.len()) * 450;
            let deductions = base as f64 * 0.185;
            json!({
                "id": format!("PAY-{:04}", 2601 + i),
                "employee": employee(i),
                "month": if i < EMPLOYEES.len() { "2026-02" } else { "2026-03" },
                "base_salary": base,
                "deductions": deductions,
                "net_amount": base as f64 - deductions,
                "paid": i < EMPLOYEES.len(),
            })
        })
        .collect()
}

fn requests() -> Vec<Value> {
    const TYPES: &[&str] = &["Equipment", "Expense", "Schedule change", "Document"];
    (0..11)
        .map(|i| {
            let status = match i % 4 {
                0 | 2 => "Pending",
                1 => "Approved",
                _ => "Rejected",
            };
            let note = if i % 3 == 0 {
                Value::Null
            } else {
                json!("Needed for the Q2 onboarding cohort")
            };
            json!({
                "id": format!("REQ-{:03}", i + 1),
                "employee": employee(i + 1),
                "type": TYPES[i % TYPES.len()],
                "submitted_at": format!("{} 10:{:02}:00", day(i), (i * 7) % 60),
                "status": status,
                "note": note,
            })
        })
        .collect()
}

fn permissions() -> Vec<Value> {
    const MODULES: &[&str] = &["Payroll", "Attendance", "Recruiting"];
    (0..EMPLOYEES.len())
        .flat_map(|e| {
            MODULES.iter().enumerate().map(move |(m, module)| {
                let admin = e % 4 == 0;
                json!({
                    "id": e * MODULES.len() + m + 1,
                    "employee": employee(e),
                    "role": if admin { "Admin" } else { "Member" },
                    "module": module,
                    "can_view": admin || m != 0,
                    "can_edit": admin,
                    "updated_at": format!("{} 09:00:00", day(e + m)),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use datatable::JsonRecord;

    #[test]
    fn test_samples_load_for_every_screen() {
        for screen in Screen::value_variants() {
            let records = JsonRecord::from_values(records(*screen)).unwrap();
            assert!(!records.is_empty(), "{screen:?}");
        }
    }

    #[test]
    fn test_attendance_has_more_than_one_page() {
        assert!(records(Screen::Attendance).len() > 10);
    }
}
