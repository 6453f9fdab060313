//! AbTestErrorCode trait for the calling surface.

/// Every error enum implements this so a caller can present a stable,
/// structured code next to the human-readable message.
pub trait AbTestErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
