// src/output/mod.rs
//! Output handling with clear separation of planning and execution.

mod paths;
mod types;
mod writer;

pub use paths::{resolve_output_dir, staging_path};
pub use types::{CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport};
pub use writer::deliver;
