//! Cleaning pipelines: named, ordered sequences of steps executed as one
//! operator action, with a per-step log and a dry-run preview.

pub mod runner;
pub mod spec;

pub use runner::{PipelineContext, PipelinePreview, PipelineRun, PipelineRunner};
pub use spec::{named_pipeline, presets, PipelineDef, PipelineFile, StepSpec};
