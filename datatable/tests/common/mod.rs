#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use datatable::{Column, ColumnSet, DataItem};

#[derive(Debug, Clone, PartialEq, DataItem)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub active: bool,
}

pub fn employee(id: u32, name: &str, department: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: format!("{}@acme.test", name.to_lowercase()),
        department: department.to_string(),
        salary: 1000.0 * f64::from(id),
        active: id % 2 == 1,
    }
}

/// Three named employees.
pub fn staff() -> Vec<Employee> {
    vec![
        employee(1, "Alice", "Engineering"),
        employee(2, "Bob", "Sales"),
        employee(3, "Carol", "Engineering"),
    ]
}

/// `n` employees with ids `1..=n`.
pub fn roster(n: u32) -> Vec<Employee> {
    (1..=n)
        .map(|id| employee(id, &format!("Person{id:02}"), "Ops"))
        .collect()
}

pub fn columns() -> ColumnSet<Employee> {
    ColumnSet::new(vec![
        Column::new("name", "Name").sortable().filterable(),
        Column::new("email", "Email").filterable(),
        Column::new("department", "Department").sortable(),
        Column::new("salary", "Salary"),
    ])
    .unwrap()
}

/// Records every value a callback receives.
pub struct Recorder<A> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone + Send + 'static> Recorder<A> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |value| calls.lock().unwrap().push(value)
    }

    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn ids<T: DataItem>(items: &[T]) -> Vec<T::Id> {
    items.iter().map(DataItem::id).collect()
}
