use serde::Serialize;

/// Success envelope shared by every handler: `{ message, success, data }`.
///
/// Failures never use this shape; they go through `AppError`'s single
/// `{ error }` envelope instead.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            data,
        }
    }
}
