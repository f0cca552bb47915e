/// Fetch pipeline: resolve the employee, then fetch their tasks.
///
/// Requests run strictly in sequence. In separate mode the employee lookup
/// comes first, so an unknown ID never triggers a task fetch.
use super::employee_id::EmployeeId;
use super::errors::ReportError;
use crate::api::{ApiClient, ApiError};
use crate::types::{Employee, Task, TaskRecord};

/// Which upstream endpoints to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// `GET /users/{id}` then `GET /todos?userId={id}`.
    #[default]
    Separate,
    /// `GET /users/{id}/todos?_expand=user`, reading the employee from the
    /// embedded `user` object.
    Expanded,
}

/// Everything an exporter needs: the employee and their tasks in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub employee_id: EmployeeId,
    pub employee: Employee,
    pub tasks: Vec<Task>,
}

impl Report {
    /// Titles of completed tasks, in API order.
    pub fn completed(&self) -> impl Iterator<Item = &str> {
        self.tasks
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.title.as_str())
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.employee.username.as_deref()
    }

    /// Name for human-facing output: `name`, else `username`, else empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.employee
            .name
            .as_deref()
            .or(self.employee.username.as_deref())
            .unwrap_or_default()
    }

    /// Rows of the JSON export, one per task.
    #[must_use]
    pub fn records(&self) -> Vec<TaskRecord> {
        self.tasks
            .iter()
            .map(|t| TaskRecord {
                task: t.title.clone(),
                completed: t.completed,
                username: self.employee.username.clone(),
            })
            .collect()
    }
}

/// Run the resolver and fetcher for one employee.
///
/// # Errors
///
/// - `ReportError::EmployeeNotFound` — employee lookup returned non-200
/// - `ReportError::TaskFetch` — task lookup returned non-200
/// - `ReportError::Api` — transport or decode failure
pub fn fetch_report(
    client: &ApiClient,
    employee_id: EmployeeId,
    mode: FetchMode,
) -> Result<Report, ReportError> {
    let (employee, tasks) = match mode {
        FetchMode::Separate => {
            let employee = client.employee(&employee_id).map_err(not_found)?;
            let tasks = client.tasks(&employee_id).map_err(task_fetch)?;
            (employee, tasks)
        }
        FetchMode::Expanded => {
            let tasks = client.expanded_tasks(&employee_id).map_err(not_found)?;
            let embedded = tasks.iter().find_map(|t| t.user.clone());
            let employee = if let Some(employee) = embedded {
                employee
            } else {
                tracing::debug!(%employee_id, "no embedded user, looking up employee");
                client.employee(&employee_id).map_err(not_found)?
            };
            (employee, tasks)
        }
    };

    tracing::debug!(
        %employee_id,
        total = tasks.len(),
        completed = tasks.iter().filter(|t| t.completed).count(),
        "fetched tasks"
    );

    Ok(Report {
        employee_id,
        employee,
        tasks,
    })
}

// Only a status error means "not found"; transport and decode failures
// keep their own message.
fn not_found(err: ApiError) -> ReportError {
    if err.status().is_some() {
        ReportError::EmployeeNotFound { source: err }
    } else {
        ReportError::Api(err)
    }
}

fn task_fetch(err: ApiError) -> ReportError {
    if err.status().is_some() {
        ReportError::TaskFetch { source: err }
    } else {
        ReportError::Api(err)
    }
}
