//! Error display and stable-code tests.

use keyrake_core::errors::{AnalysisError, KeyrakeErrorCode, PipelineError};

#[test]
fn analysis_error_codes_are_stable() {
    assert_eq!(AnalysisError::EmptyInput.error_code(), "KR1001");
    assert_eq!(
        AnalysisError::InvalidThreshold { value: 120.0 }.error_code(),
        "KR1002"
    );
    assert_eq!(AnalysisError::Cancelled.error_code(), "KR1003");
}

#[test]
fn pipeline_error_codes_are_stable() {
    let failed = PipelineError::StepFailed {
        index: 2,
        description: "apply cross-minusation".to_string(),
        log: vec!["step 1: processed, no removals (3 remaining)".to_string()],
        source: AnalysisError::InvalidThreshold { value: -5.0 },
    };
    assert_eq!(failed.error_code(), "KR2001");
    assert_eq!(
        PipelineError::Cancelled { log: vec![] }.error_code(),
        "KR1003"
    );
    assert_eq!(
        PipelineError::InvalidDefinition("bad".to_string()).error_code(),
        "KR2002"
    );
}

#[test]
fn step_failure_display_numbers_steps_like_the_log() {
    let failed = PipelineError::StepFailed {
        index: 1,
        description: "apply cross-minusation".to_string(),
        log: vec![],
        source: AnalysisError::InvalidThreshold { value: -5.0 },
    };
    let message = failed.to_string();
    assert!(message.contains("step 2"), "index 1 is the second step");
    assert!(message.contains("apply cross-minusation"));
}

#[test]
fn partial_log_is_preserved_on_failure() {
    let log = vec!["step 1: removed 4 phrases (6 remaining)".to_string()];
    let failed = PipelineError::StepFailed {
        index: 1,
        description: "drop noise phrases".to_string(),
        log: log.clone(),
        source: AnalysisError::Cancelled,
    };
    assert_eq!(failed.partial_log(), Some(log.as_slice()));
    assert_eq!(
        PipelineError::InvalidDefinition("x".to_string()).partial_log(),
        None
    );
}
