//! Cron scheduler for the recurring reminder jobs.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use navigator_core::config::SchedulerConfig;
use navigator_core::error::AppError;
use navigator_service::ReminderGenerator;

use crate::jobs::ReminderJob;

/// Runs the reminder generator on a cron cadence.
pub struct ReminderScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Generator every job delegates to
    generator: Arc<ReminderGenerator>,
    /// Cadence and start-up behaviour
    config: SchedulerConfig,
}

impl std::fmt::Debug for ReminderScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReminderScheduler")
            .field("config", &self.config)
            .finish()
    }
}

impl ReminderScheduler {
    /// Create a new scheduler. Jobs are registered but not started.
    pub async fn new(
        generator: Arc<ReminderGenerator>,
        config: SchedulerConfig,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::scheduler(format!("Failed to create scheduler: {e}")))?;

        let this = Self {
            scheduler,
            generator,
            config,
        };
        this.register(ReminderJob::DeadlineScan, &this.config.deadline_cron)
            .await?;
        this.register(ReminderJob::RecommendationDigest, &this.config.digest_cron)
            .await?;
        Ok(this)
    }

    /// Run every job once, in order. Returns the notifications created.
    pub async fn run_now(&self) -> usize {
        let mut created = 0;
        for job in ReminderJob::ALL {
            created += job.run(&self.generator).await;
        }
        created
    }

    /// Start the schedule, running every job once first if configured.
    pub async fn start(&self) -> Result<(), AppError> {
        if self.config.run_on_start {
            let created = self.run_now().await;
            tracing::info!(created, "Initial reminder pass complete");
        }

        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::scheduler(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Reminder scheduler started");
        Ok(())
    }

    /// Cancel every scheduled job.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        let mut scheduler = self.scheduler.clone();
        scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::scheduler(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Reminder scheduler shut down");
        Ok(())
    }

    async fn register(&self, job: ReminderJob, schedule: &str) -> Result<(), AppError> {
        let generator = Arc::clone(&self.generator);
        let cron = CronJob::new_async(schedule, move |_uuid, _lock| {
            let generator = Arc::clone(&generator);
            Box::pin(async move {
                tracing::debug!(job = job.name(), "Running scheduled job");
                job.run(&generator).await;
            })
        })
        .map_err(|e| {
            AppError::scheduler(format!("Invalid schedule '{schedule}' for {job}: {e}"))
        })?;

        self.scheduler
            .add(cron)
            .await
            .map_err(|e| AppError::scheduler(format!("Failed to add {job} schedule: {e}")))?;

        tracing::info!(job = job.name(), schedule, "Registered reminder job");
        Ok(())
    }
}
