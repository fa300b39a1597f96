use std::path::PathBuf;

use thiserror::Error;

use crate::request::Cylinder;

/// Everything that can go wrong before a schedule is computed.
///
/// Once a [`crate::request::Workload`] exists none of these can happen anymore,
/// the policies themselves are total.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("head must be a non-negative integer, got {0:?}")]
    InvalidHeadPosition(String),

    #[error("unable to open cylinder request file {path:?}")]
    RequestSourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {content:?} is not a cylinder number")]
    MalformedRequest { line: usize, content: String },

    #[error("line {line}: cylinder {cylinder} is outside of [0, {cylinders})")]
    RequestOutOfRange {
        line: usize,
        cylinder: Cylinder,
        cylinders: Cylinder,
    },

    #[error("cylinder count must be at least 1, got {0}")]
    InvalidCylinderRange(Cylinder),

    #[error("policy task failed: {0}")]
    PolicyTaskFailed(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
