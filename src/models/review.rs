//! Work review DTOs

use serde::Deserialize;
use validator::Validate;

/// Request to submit a work review for a project
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    /// Defaults to project 1 when the dashboard form omits it
    pub project_id: Option<i32>,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub quality_rating: i32,

    #[validate(length(max = 2000, message = "Comments are too long"))]
    pub review_comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_review_request_validation() {
        let valid = CreateReviewRequest {
            project_id: Some(2),
            quality_rating: 4,
            review_comments: Some("Road surface already cracking".to_string()),
        };
        assert!(valid.validate().is_ok());

        let out_of_range = CreateReviewRequest {
            quality_rating: 6,
            ..valid
        };
        assert!(out_of_range.validate().is_err());
    }
}
