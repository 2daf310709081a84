pub mod content;
pub mod matching;
pub mod risk;

use serde::Serialize;

/// Success envelope shared by every endpoint: `{"success": true, "data": ...}`.
/// Failures are rendered by `AppError` as `{"success": false, "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
