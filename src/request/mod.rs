use tracing::info;

use crate::error::{ ScheduleError, ScheduleResult };

pub mod source;

pub type Cylinder = u32;

pub const DEFAULT_CYLINDERS: Cylinder = 5000;

/// The addressable cylinders of a disk, `[0, count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CylinderRange {
    count: Cylinder,
}

impl CylinderRange {
    pub fn new(count: Cylinder) -> ScheduleResult<Self> {
        if count == 0 {
            return Err(ScheduleError::InvalidCylinderRange(count));
        }
        Ok(Self { count })
    }

    pub fn count(&self) -> Cylinder {
        self.count
    }

    /// Highest addressable cylinder, the turnaround point of C-SCAN.
    pub fn last(&self) -> Cylinder {
        self.count - 1
    }

    pub fn contains(&self, cylinder: Cylinder) -> bool {
        cylinder < self.count
    }
}

impl Default for CylinderRange {
    fn default() -> Self {
        Self { count: DEFAULT_CYLINDERS }
    }
}

/// Validated input of one scheduling run.
///
/// The head may sit outside of the range, requests may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    head: Cylinder,
    requests: Vec<Cylinder>,
    range: CylinderRange,
}

impl Workload {
    pub fn new(head: Cylinder, requests: Vec<Cylinder>, range: CylinderRange) -> ScheduleResult<Self> {
        if let Some((idx, &cylinder)) = requests
            .iter()
            .enumerate()
            .find(|(_, cylinder)| !range.contains(**cylinder))
        {
            return Err(ScheduleError::RequestOutOfRange {
                line: idx + 1,
                cylinder,
                cylinders: range.count(),
            });
        }

        info!(head, requests = requests.len(), cylinders = range.count(), "workload ready");

        Ok(Self { head, requests, range })
    }

    pub fn head(&self) -> Cylinder {
        self.head
    }

    pub fn requests(&self) -> &[Cylinder] {
        &self.requests
    }

    pub fn range(&self) -> CylinderRange {
        self.range
    }
}

pub fn parse_head(raw: &str) -> ScheduleResult<Cylinder> {
    raw.trim()
        .parse::<Cylinder>()
        .map_err(|_| ScheduleError::InvalidHeadPosition(raw.to_string()))
}
