//! Resource models and DTOs

use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use validator::Validate;

/// Resource record
#[derive(Debug, Serialize)]
pub struct Resource {
    pub resource_id: i32,
    pub village_id: i32,
    pub resource_type: String,
    pub resource_name: String,
    pub total_count: Option<i32>,
    pub coverage_percentage: Option<f64>,
    pub quality_status: Option<String>,
}

impl Resource {
    pub fn from_row(row: &Row) -> Self {
        Self {
            resource_id: row.get("resource_id"),
            village_id: row.get("village_id"),
            resource_type: row.get("resource_type"),
            resource_name: row.get("resource_name"),
            total_count: row.get("total_count"),
            coverage_percentage: row.get("coverage_percentage"),
            quality_status: row.get("quality_status"),
        }
    }
}

/// Request to record a village resource
#[derive(Debug, Deserialize, Validate)]
pub struct CreateResourceRequest {
    #[validate(range(min = 1, message = "A valid village id is required"))]
    pub village_id: i32,

    #[validate(length(min = 1, max = 100, message = "Resource type is required"))]
    pub resource_type: String,

    #[validate(length(min = 1, max = 255, message = "Resource name is required"))]
    pub resource_name: String,

    #[validate(range(min = 0, message = "Count cannot be negative"))]
    pub total_count: Option<i32>,

    #[validate(range(min = 0.0, max = 100.0, message = "Coverage must be between 0 and 100"))]
    pub coverage_percentage: Option<f64>,

    pub quality_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_resource_request_validation() {
        let valid = CreateResourceRequest {
            village_id: 3,
            resource_type: "WATER".to_string(),
            resource_name: "Hand pumps".to_string(),
            total_count: Some(14),
            coverage_percentage: Some(72.5),
            quality_status: Some("GOOD".to_string()),
        };
        assert!(valid.validate().is_ok());

        let bad_coverage = CreateResourceRequest {
            coverage_percentage: Some(140.0),
            ..valid
        };
        assert!(bad_coverage.validate().is_err());
    }

    #[test]
    fn test_create_resource_request_requires_village() {
        let missing_village = CreateResourceRequest {
            village_id: 0,
            resource_type: "WATER".to_string(),
            resource_name: "Hand pumps".to_string(),
            total_count: None,
            coverage_percentage: None,
            quality_status: None,
        };
        assert!(missing_village.validate().is_err());
    }
}
