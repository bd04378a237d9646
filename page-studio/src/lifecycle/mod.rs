//! Page lifecycle
//!
//! - [`workflow`] - pure editor state machine
//! - [`orchestrator`] - async facade over storage, identity, visibility and assets

pub mod orchestrator;
pub mod workflow;

pub use orchestrator::PageLifecycle;
pub use workflow::{EditOrigin, PageWorkflow, WorkflowState};
