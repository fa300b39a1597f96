use crate::request::{ Cylinder, CylinderRange };

use super::{ sort::sort_ascending, sweep::{ boundary, split_at_head, HeadTracker }, SeekPolicy };

/// SCAN, the elevator. Sweeps down first.
///
/// Requests under the head are serviced immediately. The head then walks down
/// through everything below it. If work is still pending above, it continues
/// to cylinder 0 and reflects back up: that costs `sorted[0]` to reach the edge
/// plus `sorted[pos]` to climb back to the boundary request, after which the
/// upward sweep is charged from `sorted[pos]`. When nothing is pending above
/// the edge is never touched. When nothing is pending below the head goes
/// straight up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan;

impl SeekPolicy for Scan {
    fn total_movement(&self, head: Cylinder, requests: &[Cylinder], _range: CylinderRange) -> u64 {
        let sorted = sort_ascending(requests);
        let split = split_at_head(&sorted, head);
        let mut tracker = HeadTracker::new(head);

        tracker.seek_all(split.at);
        tracker.seek_all(split.below.iter().rev());

        if let Some(pos) = boundary(&sorted, head) {
            if !split.above.is_empty() {
                let reflection = u64::from(sorted[0]) + u64::from(sorted[pos]);
                tracker.charge(reflection, sorted[pos]);
            }
        }

        tracker.seek_all(split.above);
        tracker.total()
    }
}

/// Circular SCAN. Sweeps up only.
///
/// After the last request above the head, the head runs to the top cylinder,
/// wraps to cylinder 0 at a fixed cost of one cylinder, and sweeps up again
/// through the requests it passed over. The edge run and the wrap only happen
/// when requests are pending on both sides of the head; with nothing above, the
/// head moves straight to the lowest request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan;

/// Cost of stepping from the last cylinder onto cylinder 0.
const WRAP_STEP: u64 = 1;

impl SeekPolicy for CScan {
    fn total_movement(&self, head: Cylinder, requests: &[Cylinder], range: CylinderRange) -> u64 {
        let sorted = sort_ascending(requests);
        let split = split_at_head(&sorted, head);
        let mut tracker = HeadTracker::new(head);

        tracker.seek_all(split.at);
        tracker.seek_all(split.above);

        if !split.above.is_empty() && !split.below.is_empty() {
            let to_edge = u64::from(range.last().abs_diff(tracker.position()));
            tracker.charge(to_edge + WRAP_STEP, 0);
        }

        tracker.seek_all(split.below);
        tracker.total()
    }
}
