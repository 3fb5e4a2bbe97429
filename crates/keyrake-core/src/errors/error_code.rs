//! Stable error codes for UI layers and structured logs.

pub const EMPTY_INPUT: &str = "KR1001";
pub const INVALID_THRESHOLD: &str = "KR1002";
pub const CANCELLED: &str = "KR1003";
pub const STEP_FAILED: &str = "KR2001";
pub const INVALID_PIPELINE: &str = "KR2002";

/// Maps an error to its stable code. Codes never change once released;
/// display messages may.
pub trait KeyrakeErrorCode {
    fn error_code(&self) -> &'static str;
}
