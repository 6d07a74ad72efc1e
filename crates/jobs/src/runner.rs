use async_trait::async_trait;
use crm_housekeeping_application::ports::ActivityLog;
use std::time::Instant;
use tracing::{error, info, warn};

/// Result of one job invocation. Task failures are recorded in the job's
/// activity log, so only `LogWriteFailed` means the outcome went unrecorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    TaskFailed(String),
    LogWriteFailed(String),
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Completed)
    }
}

#[derive(Debug, Clone)]
pub struct JobReport {
    pub job: &'static str,
    pub outcome: JobOutcome,
    pub elapsed_ms: u128,
}

/// Append `lines` and fold the write result into the task's result.
pub(crate) async fn record(
    activity_log: &dyn ActivityLog,
    lines: Vec<String>,
    task_error: Option<String>,
) -> JobOutcome {
    if let Err(e) = activity_log.append(&lines).await {
        return JobOutcome::LogWriteFailed(e.to_string());
    }
    match task_error {
        Some(e) => JobOutcome::TaskFailed(e),
        None => JobOutcome::Completed,
    }
}

/// A housekeeping task that runs once per invocation and records its own
/// outcome in an activity log.
#[async_trait]
pub trait HousekeepingJob: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run_once(&self) -> JobOutcome;
}

/// Runs jobs one after another, exactly once each.
pub struct JobRunner {
    jobs: Vec<Box<dyn HousekeepingJob>>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    pub fn with_job(mut self, job: impl HousekeepingJob + 'static) -> Self {
        self.jobs.push(Box::new(job));
        self
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub async fn run(self) -> Vec<JobReport> {
        let mut reports = Vec::with_capacity(self.jobs.len());

        for job in &self.jobs {
            info!(job = job.name(), "Running housekeeping job");
            let started = Instant::now();
            let outcome = job.run_once().await;
            let elapsed_ms = started.elapsed().as_millis();

            match &outcome {
                JobOutcome::Completed => {
                    info!(job = job.name(), elapsed_ms, "Housekeeping job completed");
                }
                JobOutcome::TaskFailed(e) => {
                    warn!(job = job.name(), elapsed_ms, error = %e, "Housekeeping job failed");
                }
                JobOutcome::LogWriteFailed(e) => {
                    error!(
                        job = job.name(),
                        elapsed_ms,
                        error = %e,
                        "Housekeeping job outcome could not be recorded"
                    );
                }
            }

            reports.push(JobReport {
                job: job.name(),
                outcome,
                elapsed_ms,
            });
        }

        reports
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
