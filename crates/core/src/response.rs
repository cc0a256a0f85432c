//! JSON response bodies

use serde::{Deserialize, Serialize};

/// Success body: `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn welcome() -> Self {
        Self::new("Welcome to the Cancer Diagnosis API")
    }

    pub fn added() -> Self {
        Self::new("Patient added successfully")
    }

    pub fn updated() -> Self {
        Self::new("Patient updated successfully")
    }

    pub fn deleted() -> Self {
        Self::new("Patient deleted successfully")
    }
}

/// Error body: `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn connection() -> Self {
        Self::new("Database connection error")
    }

    pub fn not_found() -> Self {
        Self::new("Patient not found")
    }

    pub fn internal() -> Self {
        Self::new("Internal Server Error")
    }
}
