/// Shared fixtures for exporter and pipeline tests.
use super::{EmployeeId, Report};
use crate::types::{Employee, Task};

/// Employee 1 ("Bret") with one completed and one open task.
pub(crate) fn sample_report() -> Report {
    Report {
        employee_id: "1".parse::<EmployeeId>().unwrap(),
        employee: Employee {
            name: Some("Leanne Graham".to_owned()),
            username: Some("Bret".to_owned()),
        },
        tasks: vec![task("a", true), task("b", false)],
    }
}

pub(crate) fn task(title: &str, completed: bool) -> Task {
    Task {
        title: title.to_owned(),
        completed,
        user: None,
    }
}
