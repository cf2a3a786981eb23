//! Development project models

use serde::Serialize;
use tokio_postgres::Row;

/// Development project record.
///
/// `village_name` is present only on queries that join it in.
#[derive(Debug, Serialize)]
pub struct Project {
    pub project_id: i32,
    pub village_id: i32,
    pub project_name: String,
    pub budget_allocated: Option<f64>,
    pub budget_spent: Option<f64>,
    pub completion_percentage: Option<f64>,
    pub project_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village_name: Option<String>,
}

impl Project {
    pub fn from_row(row: &Row) -> Self {
        Self {
            project_id: row.get("project_id"),
            village_id: row.get("village_id"),
            project_name: row.get("project_name"),
            budget_allocated: row.get("budget_allocated"),
            budget_spent: row.get("budget_spent"),
            completion_percentage: row.get("completion_percentage"),
            project_status: row.get("project_status"),
            village_name: row.try_get("village_name").ok(),
        }
    }
}
