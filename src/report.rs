use std::fmt::Write;

use crate::policy::Policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyResult {
    pub policy: Policy,
    pub total: u64,
}

/// Totals of one run, always in [`Policy::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleReport {
    results: Vec<PolicyResult>,
}

impl ScheduleReport {
    pub fn new(mut results: Vec<PolicyResult>) -> Self {
        results.sort_by_key(|result| result.policy);
        Self { results }
    }

    pub fn get(&self, policy: Policy) -> Option<u64> {
        self.results
            .iter()
            .find(|result| result.policy == policy)
            .map(|result| result.total)
    }

    pub fn results(&self) -> &[PolicyResult] {
        &self.results
    }

    pub fn totals(&self) -> Vec<u64> {
        self.results.iter().map(|result| result.total).collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Total Head Movement for SCAN:\t00005318`
    #[default]
    Reference,
    /// Aligned `policy  total` rows
    Table,
}

pub fn render(report: &ScheduleReport, format: OutputFormat) -> String {
    let mut out = String::new();

    match format {
        OutputFormat::Reference => {
            for result in report.results() {
                // Writing into a String cannot fail.
                let _ = writeln!(out, "Total Head Movement for {}:\t{:08}", result.policy, result.total);
            }
        }
        OutputFormat::Table => {
            let _ = writeln!(out, "{:<8}{:>12}", "policy", "total");
            for result in report.results() {
                let _ = writeln!(out, "{:<8}{:>12}", result.policy.as_str(), result.total);
            }
        }
    }

    out
}
