use crate::request::{ Cylinder, CylinderRange };

use super::{ sweep::HeadTracker, SeekPolicy };

/// First-Come-First-Served: requests are visited in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn total_movement(&self, head: Cylinder, requests: &[Cylinder], _range: CylinderRange) -> u64 {
        let mut tracker = HeadTracker::new(head);
        tracker.seek_all(requests);
        tracker.total()
    }
}
