use tracing::trace;

use crate::request::Cylinder;

/// Running head position and accumulated seek distance of one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadTracker {
    position: Cylinder,
    total: u64,
}

impl HeadTracker {
    pub fn new(head: Cylinder) -> Self {
        Self { position: head, total: 0 }
    }

    pub fn seek(&mut self, to: Cylinder) {
        let distance = u64::from(self.position.abs_diff(to));
        trace!(from = self.position, to, distance, "seek");
        self.total += distance;
        self.position = to;
    }

    pub fn seek_all<'a>(&mut self, cylinders: impl IntoIterator<Item = &'a Cylinder>) {
        for &cylinder in cylinders {
            self.seek(cylinder);
        }
    }

    /// Charges `distance` and parks the head on `at` without any further cost.
    /// Used for edge travel that is not a plain seek between two requests.
    pub fn charge(&mut self, distance: u64, at: Cylinder) {
        trace!(distance, at, "edge travel");
        self.total += distance;
        self.position = at;
    }

    pub fn position(&self) -> Cylinder {
        self.position
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Sorted requests cut around the head position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadSplit<'a> {
    pub below: &'a [Cylinder],
    pub at: &'a [Cylinder],
    pub above: &'a [Cylinder],
}

pub fn split_at_head(sorted: &[Cylinder], head: Cylinder) -> HeadSplit<'_> {
    let lo = sorted.partition_point(|&c| c < head);
    let hi = sorted.partition_point(|&c| c <= head);

    HeadSplit {
        below: &sorted[..lo],
        at: &sorted[lo..hi],
        above: &sorted[hi..],
    }
}

/// Largest index of `sorted` strictly below `head`, `None` when the head sits
/// at or below every request.
pub fn boundary(sorted: &[Cylinder], head: Cylinder) -> Option<usize> {
    sorted.partition_point(|&c| c < head).checked_sub(1)
}
