/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Signup and login
/// - `projects`: Project CRUD
/// - `tasks`: Task CRUD

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod health;
pub mod projects;
pub mod tasks;

/// Plain acknowledgement body, `{"message": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
