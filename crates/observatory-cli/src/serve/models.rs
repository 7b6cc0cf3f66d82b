//! API request/response models for the dashboard server.
//!
//! The chart itself is served as `observatory_core::ChartData` directly;
//! these are the remaining Data Transfer Objects.

use serde::{Deserialize, Serialize};

// =============================================================================
// Class List Models (for `/api/classes`)
// =============================================================================

/// Selectable classes and the one to show first.
#[derive(Debug, Serialize)]
pub struct ClassList {
    pub classes: Vec<String>,
    /// Label selected on page load.
    pub default: String,
}

// =============================================================================
// Selection Models (for `/api/selection`)
// =============================================================================

/// Query parameters for the selection endpoint.
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    /// Selected class label, e.g. `schema:Product`.
    pub class: String,
}

/// Error body returned for a rejected request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
