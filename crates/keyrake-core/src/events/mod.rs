//! Engine events: matcher progress and pipeline step lifecycle.
//!
//! The engine never owns a UI thread; callers register handlers and render
//! progress however they like.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::KeyrakeEventHandler;
pub use types::{
    MatchProgressEvent, PipelineCompletedEvent, StepCompletedEvent, StepStartedEvent,
};
