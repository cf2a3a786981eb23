//! Complaint models, DTOs, and the status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio_postgres::Row;
use validator::Validate;

/// Complaint lifecycle: `PENDING -> IN_PROGRESS -> RESOLVED`, forward only.
/// Skipping straight from `PENDING` to `RESOLVED` is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "PENDING",
            ComplaintStatus::InProgress => "IN_PROGRESS",
            ComplaintStatus::Resolved => "RESOLVED",
        }
    }

    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        use ComplaintStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress) | (Pending, Resolved) | (InProgress, Resolved)
        )
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ComplaintStatus::Pending),
            "IN_PROGRESS" => Ok(ComplaintStatus::InProgress),
            "RESOLVED" => Ok(ComplaintStatus::Resolved),
            other => Err(format!("Unknown complaint status: {}", other)),
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint record.
///
/// The joined columns (`village_name`, `villager_name`, `hours_ago`) are
/// present only on queries that select them.
#[derive(Debug, Serialize)]
pub struct Complaint {
    pub complaint_id: i32,
    pub villager_id: Option<i32>,
    pub village_id: i32,
    pub complaint_type: String,
    pub complaint_title: String,
    pub complaint_description: Option<String>,
    pub location: Option<String>,
    pub priority_level: Option<String>,
    pub status: String,
    pub filed_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub villager_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_ago: Option<f64>,
}

impl Complaint {
    pub fn from_row(row: &Row) -> Self {
        Self {
            complaint_id: row.get("complaint_id"),
            villager_id: row.get("villager_id"),
            village_id: row.get("village_id"),
            complaint_type: row.get("complaint_type"),
            complaint_title: row.get("complaint_title"),
            complaint_description: row.get("complaint_description"),
            location: row.get("location"),
            priority_level: row.get("priority_level"),
            status: row.get("status"),
            filed_date: row.get("filed_date"),
            village_name: row.try_get("village_name").ok(),
            villager_name: row.try_get::<_, Option<String>>("villager_name").ok().flatten(),
            hours_ago: row.try_get("hours_ago").ok(),
        }
    }
}

/// Request to file a complaint
#[derive(Debug, Deserialize, Validate)]
pub struct CreateComplaintRequest {
    /// Defaults to village 1 when the dashboard form omits it
    pub village_id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Complaint type is required"))]
    pub complaint_type: String,

    #[validate(length(min = 1, max = 255, message = "Complaint title is required"))]
    pub complaint_title: String,

    pub complaint_description: Option<String>,

    #[validate(length(max = 255, message = "Location is too long"))]
    pub location: Option<String>,

    #[validate(length(max = 20, message = "Priority level is too long"))]
    pub priority_level: Option<String>,
}

/// Request to move a complaint to a new status
#[derive(Debug, Deserialize)]
pub struct UpdateComplaintStatusRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ] {
            assert_eq!(status.as_str().parse::<ComplaintStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("CLOSED".parse::<ComplaintStatus>().is_err());
        assert!("pending".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn test_legal_transitions() {
        use ComplaintStatus::*;
        assert!(Pending.can_transition_to(InProgress));
        assert!(Pending.can_transition_to(Resolved));
        assert!(InProgress.can_transition_to(Resolved));
    }

    #[test]
    fn test_illegal_transitions() {
        use ComplaintStatus::*;
        assert!(!Resolved.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(InProgress));
        assert!(!InProgress.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Resolved));
    }

    #[test]
    fn test_create_complaint_request_validation() {
        let valid = CreateComplaintRequest {
            village_id: Some(3),
            complaint_type: "water".to_string(),
            complaint_title: "No supply".to_string(),
            complaint_description: None,
            location: Some("Ward 4".to_string()),
            priority_level: Some("HIGH".to_string()),
        };
        assert!(valid.validate().is_ok());

        let untitled = CreateComplaintRequest {
            complaint_title: String::new(),
            ..valid
        };
        assert!(untitled.validate().is_err());
    }
}
