pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod policy;
pub mod report;
pub mod request;

#[cfg(test)]
mod tests;

pub use engine::SchedulingEngine;
pub use error::{ ScheduleError, ScheduleResult };
pub use policy::{ Policy, SeekPolicy };
pub use report::ScheduleReport;
pub use request::{ Cylinder, CylinderRange, Workload };
