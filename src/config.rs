use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::ScheduleResult,
    policy::Policy,
    report::OutputFormat,
    request::{ Cylinder, CylinderRange, DEFAULT_CYLINDERS },
};

pub struct SchedulerOptions {
    // Addressable cylinders, only C-SCAN looks at the upper edge
    pub cylinders: CylinderRange,
    // Run each policy on the tokio blocking pool
    pub parallel: bool,
    // Empty means every policy
    pub policies: Vec<Policy>,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            cylinders: CylinderRange::default(),
            parallel: false,
            policies: Policy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Total head movement of a cylinder request list under six disk scheduling policies", long_about = None)]
pub struct Args {
    /// Starting cylinder of the head
    #[arg(allow_hyphen_values = true)]
    pub head: String,

    /// File with one requested cylinder per line
    pub request_file: PathBuf,

    /// Number of cylinders on the disk
    #[arg(long, env = "DISK_SCHED_CYLINDERS", default_value_t = DEFAULT_CYLINDERS)]
    pub cylinders: Cylinder,

    /// Only run the named policy, may be repeated
    #[arg(long = "policy", value_name = "POLICY")]
    pub policies: Vec<Policy>,

    /// Compute the policies concurrently
    #[arg(long, default_value = "false")]
    pub parallel: bool,

    /// Output layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Reference)]
    pub format: OutputFormat,
}

impl Args {
    pub fn scheduler_options(&self) -> ScheduleResult<SchedulerOptions> {
        let policies = if self.policies.is_empty() {
            Policy::ALL.to_vec()
        } else {
            self.policies.clone()
        };

        Ok(SchedulerOptions {
            cylinders: CylinderRange::new(self.cylinders)?,
            parallel: self.parallel,
            policies,
        })
    }
}
