//! Background job runner.
//!
//! Each [`ScheduledJob`] runs on its own tokio task, ticking at the job's
//! interval until the shared [`CancellationToken`] is cancelled. A failing
//! run is logged and the job keeps its schedule.

use std::sync::Arc;

use pawhub_core::{AppCore, ChatRetentionJob, HeartbeatJob, ScheduledJob, SchedulerSettings};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::service::ServiceKind;

/// Drives scheduled jobs until cancelled.
pub struct JobScheduler {
    cancel: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

impl JobScheduler {
    /// Create a scheduler whose jobs stop when `cancel` fires.
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            handles: Vec::new(),
        }
    }

    /// Start ticking a job. The first run happens after one full interval.
    ///
    /// A job whose first tick cannot be represented as an `Instant` is
    /// logged and not started.
    pub fn spawn(&mut self, job: Arc<dyn ScheduledJob>) {
        let period = job.interval();
        let Some(first_tick) = tokio::time::Instant::now().checked_add(period) else {
            tracing::error!(
                target: "pawhub.scheduler",
                job = job.name(),
                interval_secs = period.as_secs(),
                "Job interval out of range, not scheduling"
            );
            return;
        };

        let cancel = self.cancel.clone();
        tracing::info!(
            target: "pawhub.scheduler",
            job = job.name(),
            interval_secs = job.interval().as_secs_f64(),
            "Scheduling job"
        );

        self.handles.push(tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if let Err(e) = job.run().await {
                            tracing::warn!(
                                target: "pawhub.scheduler",
                                job = job.name(),
                                error = %e,
                                "Scheduled job failed"
                            );
                        }
                    }
                }
            }

            tracing::debug!(target: "pawhub.scheduler", job = job.name(), "Job stopped");
        }));
    }

    /// Number of jobs started.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no job was started.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel all jobs and wait for their tasks to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        for handle in self.handles {
            if let Err(e) = handle.await {
                tracing::error!(target: "pawhub.scheduler", error = %e, "Job task panicked");
            }
        }
    }
}

/// Jobs a service process registers.
///
/// Every process gets a heartbeat. Processes serving chat also prune
/// history when a retention window is configured.
pub fn jobs_for(
    service: ServiceKind,
    settings: &SchedulerSettings,
    core: &Arc<AppCore>,
) -> Vec<Arc<dyn ScheduledJob>> {
    let mut jobs: Vec<Arc<dyn ScheduledJob>> = vec![Arc::new(HeartbeatJob::new(
        service.as_str(),
        settings.heartbeat_interval(),
    ))];

    if service.includes(ServiceKind::Chat) {
        if let Some(days) = settings.chat_retention_days {
            jobs.push(Arc::new(ChatRetentionJob::new(
                Arc::clone(core),
                days,
                settings.retention_sweep_interval(),
            )));
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use pawhub_core::{ChatHistoryRepository, CoreError, NewChatHistory};
    use pawhub_db::{SqliteChatHistoryRepository, TestDb};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingJob {
        runs: Arc<AtomicUsize>,
        fail: bool,
        interval: Duration,
    }

    impl CountingJob {
        fn every_10ms(runs: &Arc<AtomicUsize>, fail: bool) -> Self {
            Self {
                runs: Arc::clone(runs),
                fail,
                interval: Duration::from_millis(10),
            }
        }
    }

    #[async_trait]
    impl ScheduledJob for CountingJob {
        fn name(&self) -> &str {
            "counting"
        }

        fn interval(&self) -> Duration {
            self.interval
        }

        async fn run(&self) -> Result<(), CoreError> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(CoreError::Internal("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn failing_job_keeps_running_until_cancelled() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut scheduler = JobScheduler::new(CancellationToken::new());
        scheduler.spawn(Arc::new(CountingJob::every_10ms(&runs, true)));

        tokio::time::sleep(Duration::from_millis(80)).await;
        scheduler.shutdown().await;

        let after_shutdown = runs.load(Ordering::SeqCst);
        assert!(after_shutdown >= 2, "job ran {after_shutdown} times");

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(runs.load(Ordering::SeqCst), after_shutdown);
    }

    #[tokio::test]
    async fn cancelling_the_token_stops_jobs() {
        let token = CancellationToken::new();
        let mut scheduler = JobScheduler::new(token.clone());
        scheduler.spawn(Arc::new(CountingJob::every_10ms(
            &Arc::new(AtomicUsize::new(0)),
            false,
        )));
        assert_eq!(scheduler.len(), 1);

        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), scheduler.shutdown())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn retention_job_only_for_chat_with_retention() {
        let db = TestDb::new().await.unwrap();
        let core = Arc::new(db.app_core());

        let mut settings = SchedulerSettings::with_defaults();
        assert_eq!(jobs_for(ServiceKind::Chat, &settings, &core).len(), 1);

        settings.chat_retention_days = Some(30);
        let names = |service: ServiceKind| {
            jobs_for(service, &settings, &core)
                .iter()
                .map(|j| j.name().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(ServiceKind::Chat), ["heartbeat", "chat-retention"]);
        assert_eq!(names(ServiceKind::All), ["heartbeat", "chat-retention"]);
        assert_eq!(names(ServiceKind::Gym), ["heartbeat"]);
    }

    #[tokio::test]
    async fn unrepresentable_interval_is_not_scheduled() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut scheduler = JobScheduler::new(CancellationToken::new());
        scheduler.spawn(Arc::new(CountingJob {
            interval: Duration::MAX,
            ..CountingJob::every_10ms(&runs, false)
        }));
        scheduler.spawn(Arc::new(CountingJob::every_10ms(&runs, false)));

        assert_eq!(scheduler.len(), 1);
        tokio::time::timeout(Duration::from_secs(1), scheduler.shutdown())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn retention_job_prunes_only_expired_history() {
        let db = TestDb::new().await.unwrap();
        let core = Arc::new(db.app_core());
        let repo = SqliteChatHistoryRepository::new(db.pool().clone());
        let entry = |prompt: &str, age_days: i64| NewChatHistory {
            user_id: 4,
            prompt: prompt.to_string(),
            reply: "ok".to_string(),
            created_at: Utc::now() - chrono::Duration::days(age_days),
        };
        repo.insert(&entry("stale", 45)).await.unwrap();
        repo.insert(&entry("fresh", 1)).await.unwrap();

        let settings = SchedulerSettings {
            chat_retention_days: Some(30),
            ..SchedulerSettings::with_defaults()
        };
        let jobs = jobs_for(ServiceKind::Chat, &settings, &core);
        let retention = jobs
            .iter()
            .find(|j| j.name() == "chat-retention")
            .unwrap();
        retention.run().await.unwrap();

        let left = repo
            .find_by_user_id_order_by_created_at_desc(4)
            .await
            .unwrap();
        let prompts: Vec<&str> = left.iter().map(|c| c.prompt.as_str()).collect();
        assert_eq!(prompts, ["fresh"]);
    }
}
