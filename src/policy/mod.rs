use std::{ fmt, str::FromStr };

use crate::request::{ Cylinder, CylinderRange, Workload };

pub mod fcfs;
pub mod look;
pub mod scan;
pub mod sort;
pub mod sstf;
pub mod sweep;

pub use fcfs::Fcfs;
pub use look::{ CLook, Look };
pub use scan::{ CScan, Scan };
pub use sstf::Sstf;

/// A disk scheduling rule reduced to its cost: the total number of cylinders
/// the head crosses while servicing every request exactly once.
///
/// Implementations never mutate `requests` and never fail.
pub trait SeekPolicy {
    fn total_movement(&self, head: Cylinder, requests: &[Cylinder], range: CylinderRange) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
}

impl Policy {
    /// Every policy in report order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::CLook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::CLook => "C-LOOK",
        }
    }

    fn rule(&self) -> &'static dyn SeekPolicy {
        match self {
            Policy::Fcfs => &Fcfs,
            Policy::Sstf => &Sstf,
            Policy::Scan => &Scan,
            Policy::CScan => &CScan,
            Policy::Look => &Look,
            Policy::CLook => &CLook,
        }
    }

    pub fn total_movement(&self, head: Cylinder, requests: &[Cylinder], range: CylinderRange) -> u64 {
        self.rule().total_movement(head, requests, range)
    }

    pub fn compute(&self, workload: &Workload) -> u64 {
        self.total_movement(workload.head(), workload.requests(), workload.range())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy {:?}, expected one of fcfs, sstf, scan, c-scan, look, c-look", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sstf" => Ok(Policy::Sstf),
            "scan" => Ok(Policy::Scan),
            "c-scan" | "cscan" => Ok(Policy::CScan),
            "look" => Ok(Policy::Look),
            "c-look" | "clook" => Ok(Policy::CLook),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
