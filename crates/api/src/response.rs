//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body for successful deletions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
