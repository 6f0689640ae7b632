//! Core domain model types for shipflow.
//!
//! This module contains the fundamental types shared by stages, the runner
//! and the pipeline:
//! - Stage kind and status enums
//! - Per-stage execution records

mod record;
mod status;

pub use record::StageRecord;
pub use status::{StageKind, StageStatus};
