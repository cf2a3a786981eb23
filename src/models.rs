//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all request/response structures used by the API.

pub mod complaint;
pub mod project;
pub mod report;
pub mod resource;
pub mod review;
pub mod village;

// Re-export commonly used types
pub use complaint::*;
pub use project::*;
pub use report::*;
pub use resource::*;
pub use review::*;
pub use village::*;

use serde::Serialize;

/// Message-only response (no data)
#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("Village added successfully.")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Village added successfully.");
    }
}
