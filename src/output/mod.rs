// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Routes map to output paths as pure functions, page writes are
//! planned as data, and a single writer performs the actual I/O and
//! reports what happened.

pub mod paths;
pub mod types;
pub mod writer;

pub use paths::Route;
pub use types::{
    CompletedOperation, DeliveryTarget, ExecutionStats, FailedOperation, OutputPlan, OutputReport,
};
pub use writer::deliver;
