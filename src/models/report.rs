//! Reporting models: dashboard stats and admin aggregation rows

use serde::Serialize;
use tokio_postgres::Row;

/// Citizen dashboard aggregate counts
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_villages: i64,
    pub total_population: i64,
    pub ongoing_projects: i64,
    pub total_budget: f64,
    pub total_reviews: i64,
    pub total_complaints: i64,
    pub completed_projects: i64,
}

impl DashboardStats {
    pub fn from_row(row: &Row) -> Self {
        Self {
            total_villages: row.get("total_villages"),
            total_population: row.get("total_population"),
            ongoing_projects: row.get("ongoing_projects"),
            total_budget: row.get("total_budget"),
            total_reviews: row.get("total_reviews"),
            total_complaints: row.get("total_complaints"),
            completed_projects: row.get("completed_projects"),
        }
    }
}

/// One labeled metric row in the executive summary
#[derive(Debug, Serialize)]
pub struct SummaryMetric {
    pub metric: String,
    pub value: i64,
}

impl SummaryMetric {
    pub fn from_row(row: &Row) -> Self {
        Self {
            metric: row.get("metric"),
            value: row.get("value"),
        }
    }
}

/// Per-resource-type rollup
#[derive(Debug, Serialize)]
pub struct ResourceTypeSummary {
    pub resource_type: String,
    pub unique_resources: i64,
    pub total_units: i64,
    pub avg_coverage: Option<f64>,
    pub villages_served: i64,
}

impl ResourceTypeSummary {
    pub fn from_row(row: &Row) -> Self {
        Self {
            resource_type: row.get("resource_type"),
            unique_resources: row.get("unique_resources"),
            total_units: row.get("total_units"),
            avg_coverage: row.get("avg_coverage"),
            villages_served: row.get("villages_served"),
        }
    }
}

/// Resource inventory line for one village
#[derive(Debug, Serialize)]
pub struct TopResource {
    pub village_name: String,
    pub resource_type: String,
    pub resource_name: String,
    pub total_count: Option<i32>,
    pub coverage: Option<f64>,
    pub quality: Option<String>,
}

impl TopResource {
    pub fn from_row(row: &Row) -> Self {
        Self {
            village_name: row.get("village_name"),
            resource_type: row.get("resource_type"),
            resource_name: row.get("resource_name"),
            total_count: row.get("total_count"),
            coverage: row.get("coverage"),
            quality: row.get("quality"),
        }
    }
}

/// Complaint count and share for one status
#[derive(Debug, Serialize)]
pub struct ComplaintStatusBreakdown {
    pub status: String,
    pub count_complaints: i64,
    pub percentage: Option<f64>,
}

impl ComplaintStatusBreakdown {
    pub fn from_row(row: &Row) -> Self {
        Self {
            status: row.get("status"),
            count_complaints: row.get("count_complaints"),
            percentage: row.get("percentage"),
        }
    }
}

/// Recently filed complaint line
#[derive(Debug, Serialize)]
pub struct RecentComplaint {
    pub complaint_id: i32,
    pub village_name: String,
    #[serde(rename = "type")]
    pub complaint_type: String,
    pub title: String,
    pub status: String,
    pub priority: Option<String>,
}

impl RecentComplaint {
    pub fn from_row(row: &Row) -> Self {
        Self {
            complaint_id: row.get("complaint_id"),
            village_name: row.get("village_name"),
            complaint_type: row.get("type"),
            title: row.get("title"),
            status: row.get("status"),
            priority: row.get("priority"),
        }
    }
}

/// Budget and completion line for one project
#[derive(Debug, Serialize)]
pub struct ProjectPerformance {
    pub project_name: String,
    pub village: String,
    pub budget: Option<f64>,
    pub spent: Option<f64>,
    pub completion: Option<f64>,
    pub status: Option<String>,
}

impl ProjectPerformance {
    pub fn from_row(row: &Row) -> Self {
        Self {
            project_name: row.get("project_name"),
            village: row.get("village"),
            budget: row.get("budget"),
            spent: row.get("spent"),
            completion: row.get("completion"),
            status: row.get("status"),
        }
    }
}

/// Work review line joined to its project and village
#[derive(Debug, Serialize)]
pub struct WorkReviewSummary {
    pub project: String,
    pub village: String,
    pub rating: Option<i32>,
    pub comments: String,
}

impl WorkReviewSummary {
    pub fn from_row(row: &Row) -> Self {
        Self {
            project: row.get("project"),
            village: row.get("village"),
            rating: row.get("rating"),
            comments: row.get("comments"),
        }
    }
}
