//! Error handling for Keyrake.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod error_code;
pub mod pipeline_error;

pub use analysis_error::AnalysisError;
pub use error_code::KeyrakeErrorCode;
pub use pipeline_error::PipelineError;
