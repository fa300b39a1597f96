use crate::request::{ Cylinder, CylinderRange };

use super::{ sweep::HeadTracker, SeekPolicy };

/// Shortest-Seek-Time-First.
///
/// Each step rescans every pending request and takes the closest one. Equal
/// distances go to the request that arrived first. Duplicate cylinders are
/// separate requests, each tracked by index and serviced once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl SeekPolicy for Sstf {
    fn total_movement(&self, head: Cylinder, requests: &[Cylinder], _range: CylinderRange) -> u64 {
        let mut serviced = vec![false; requests.len()];
        let mut tracker = HeadTracker::new(head);

        for _ in 0..requests.len() {
            let position = tracker.position();
            let mut nearest: Option<(usize, Cylinder)> = None;

            for (idx, &cylinder) in requests.iter().enumerate() {
                if serviced[idx] {
                    continue;
                }

                let distance = position.abs_diff(cylinder);
                // Strict `<` keeps the earliest index on ties.
                match nearest {
                    Some((_, best)) if distance >= best => {}
                    _ => {
                        nearest = Some((idx, distance));
                    }
                }
            }

            // Each pass leaves one more request serviced, so one is always pending here.
            let Some((idx, _)) = nearest else {
                break;
            };

            serviced[idx] = true;
            tracker.seek(requests[idx]);
        }

        tracker.total()
    }
}
