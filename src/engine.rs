use std::sync::Arc;

use tracing::debug;

use crate::{
    config::SchedulerOptions,
    error::{ ScheduleError, ScheduleResult },
    policy::Policy,
    report::{ PolicyResult, ScheduleReport },
    request::Workload,
};

// Runs a set of policies over one immutable workload.
pub struct SchedulingEngine {
    workload: Arc<Workload>,
    policies: Vec<Policy>,
}

impl SchedulingEngine {
    pub fn new(workload: Workload) -> Self {
        Self {
            workload: Arc::new(workload),
            policies: Policy::ALL.to_vec(),
        }
    }

    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        let mut policies: Vec<Policy> = policies.into_iter().collect();
        policies.sort();
        policies.dedup();
        self.policies = policies;
        self
    }

    pub fn from_options(workload: Workload, options: &SchedulerOptions) -> Self {
        Self::new(workload).with_policies(options.policies.iter().copied())
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn run(&self) -> ScheduleReport {
        let results = self.policies
            .iter()
            .map(|&policy| run_policy(policy, &self.workload))
            .collect();

        ScheduleReport::new(results)
    }

    /// Same totals as [`SchedulingEngine::run`], one blocking task per policy.
    /// The workload is shared read-only, so no locking is involved.
    pub async fn run_parallel(&self) -> ScheduleResult<ScheduleReport> {
        let handles: Vec<_> = self.policies
            .iter()
            .map(|&policy| {
                let workload = Arc::clone(&self.workload);
                tokio::task::spawn_blocking(move || run_policy(policy, &workload))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = handle.await.map_err(|err| ScheduleError::PolicyTaskFailed(err.to_string()))?;
            results.push(result);
        }

        Ok(ScheduleReport::new(results))
    }

    pub async fn run_with(&self, options: &SchedulerOptions) -> ScheduleResult<ScheduleReport> {
        if options.parallel {
            self.run_parallel().await
        } else {
            Ok(self.run())
        }
    }
}

fn run_policy(policy: Policy, workload: &Workload) -> PolicyResult {
    let total = policy.compute(workload);
    debug!(%policy, total, "computed head movement");
    PolicyResult { policy, total }
}
