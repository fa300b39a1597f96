use crate::request::{ Cylinder, CylinderRange };

use super::{ sort::sort_ascending, sweep::{ split_at_head, HeadTracker }, SeekPolicy };

/// LOOK: up to the highest pending request, then back down to the lowest.
/// Disk edges are never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Look;

impl SeekPolicy for Look {
    fn total_movement(&self, head: Cylinder, requests: &[Cylinder], _range: CylinderRange) -> u64 {
        let sorted = sort_ascending(requests);
        let split = split_at_head(&sorted, head);
        let mut tracker = HeadTracker::new(head);

        tracker.seek_all(split.at);
        tracker.seek_all(split.above);
        tracker.seek_all(split.below.iter().rev());

        tracker.total()
    }
}

/// C-LOOK: up to the highest pending request, jump to the lowest one and
/// sweep up again. Only the jump itself is charged, never an edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct CLook;

impl SeekPolicy for CLook {
    fn total_movement(&self, head: Cylinder, requests: &[Cylinder], _range: CylinderRange) -> u64 {
        let sorted = sort_ascending(requests);
        let split = split_at_head(&sorted, head);
        let mut tracker = HeadTracker::new(head);

        tracker.seek_all(split.at);
        tracker.seek_all(split.above);
        tracker.seek_all(split.below);

        tracker.total()
    }
}
