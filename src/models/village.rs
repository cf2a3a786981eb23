//! Village models and DTOs

use crate::models::{complaint::Complaint, project::Project, resource::Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use validator::Validate;

/// Village record
#[derive(Debug, Serialize)]
pub struct Village {
    pub village_id: i32,
    pub village_name: String,
    pub village_code: String,
    pub population: Option<i32>,
    pub total_families: Option<i32>,
    pub status: String,
    pub created_date: DateTime<Utc>,
}

impl Village {
    pub fn from_row(row: &Row) -> Self {
        Self {
            village_id: row.get("village_id"),
            village_name: row.get("village_name"),
            village_code: row.get("village_code"),
            population: row.get("population"),
            total_families: row.get("total_families"),
            status: row.get("status"),
            created_date: row.get("created_date"),
        }
    }
}

/// Request to register a new village
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVillageRequest {
    #[validate(length(min = 1, max = 255, message = "Village name must be between 1 and 255 characters"))]
    pub village_name: String,

    #[validate(length(min = 1, max = 50, message = "Village code must be between 1 and 50 characters"))]
    pub village_code: String,

    #[validate(range(min = 0, message = "Population cannot be negative"))]
    pub population: Option<i32>,

    #[validate(range(min = 0, message = "Family count cannot be negative"))]
    pub total_families: Option<i32>,
}

/// Village detail: the village row plus everything attached to it
#[derive(Debug, Serialize)]
pub struct VillageDetail {
    pub village: Village,
    pub resources: Vec<Resource>,
    pub complaints: Vec<Complaint>,
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_village_request_validation() {
        let valid = CreateVillageRequest {
            village_name: "Rampur".to_string(),
            village_code: "RMP-01".to_string(),
            population: Some(1200),
            total_families: Some(260),
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateVillageRequest {
            village_name: String::new(),
            village_code: "RMP-01".to_string(),
            population: None,
            total_families: None,
        };
        assert!(empty_name.validate().is_err());

        let negative_population = CreateVillageRequest {
            village_name: "Rampur".to_string(),
            village_code: "RMP-01".to_string(),
            population: Some(-5),
            total_families: None,
        };
        assert!(negative_population.validate().is_err());
    }
}
