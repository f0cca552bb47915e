/// Wire and export types.
///
/// `Employee` and `Task` mirror the upstream JSON. Only the fields we read
/// are declared; everything else in the payload is ignored. `TaskRecord` is
/// what the JSON exporter writes.
use serde::{Deserialize, Serialize};

/// An employee (user) record. Every field is optional so a sparse record
/// still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Employee {
    /// Display name (e.g. "Leanne Graham").
    #[serde(default)]
    pub name: Option<String>,
    /// Login handle (e.g. "Bret").
    #[serde(default)]
    pub username: Option<String>,
}

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Task title.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Owning employee, present only on the `_expand=user` endpoint.
    #[serde(default)]
    pub user: Option<Employee>,
}

/// One entry of the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task title.
    pub task: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Owner's username, `null` when the employee record had none.
    pub username: Option<String>,
}
