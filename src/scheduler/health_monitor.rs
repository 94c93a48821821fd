use dioxus_logger::tracing;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, monitor::HealthMonitor};

/// Default poll cadence for the health monitor.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Shared slot holding the running monitor job, if any.
///
/// Lets the ready handler start the monitor once and the shutdown path stop it.
pub type MonitorSlot = Arc<Mutex<Option<MonitorHandle>>>;

/// Handle to a running health monitor job.
pub struct MonitorHandle {
    scheduler: JobScheduler,
    monitor: Arc<HealthMonitor>,
}

impl MonitorHandle {
    /// Cancels the recurring poll and halts the monitor.
    ///
    /// A poll already in flight runs to completion but its result is discarded.
    ///
    /// # Returns
    /// - `Ok(())` - Job cancelled
    /// - `Err(AppError::SchedulerErr)` - Scheduler failed to shut down
    pub async fn stop(mut self) -> Result<(), AppError> {
        self.monitor.halt();
        self.scheduler.shutdown().await?;

        tracing::info!("Health monitor for {} stopped", self.monitor.target());

        Ok(())
    }
}

/// Starts the health monitor scheduler
///
/// Polls the target once right away, then schedules a repeated job that polls every
/// `interval` for the lifetime of the process. There is no jitter and no backoff.
///
/// # Arguments
/// - `monitor`: Monitor to drive
/// - `interval`: Time between polls
///
/// # Returns
/// - `Ok(MonitorHandle)` - Job scheduled, keep the handle to stop it later
/// - `Err(AppError::SchedulerErr)` - Failed to create or start the scheduler
pub async fn start_monitor(
    monitor: Arc<HealthMonitor>,
    interval: Duration,
) -> Result<MonitorHandle, AppError> {
    monitor.poll().await;

    let scheduler = JobScheduler::new().await?;

    let job_monitor = monitor.clone();
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let monitor = job_monitor.clone();

        Box::pin(async move {
            monitor.poll().await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Health monitor for {} started, polling every {}s",
        monitor.target(),
        interval.as_secs()
    );

    Ok(MonitorHandle { scheduler, monitor })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::test::{
        fake::{RecordingNotifier, ScriptedProbe},
        monitor_with, unreachable,
    };

    /// Tests that starting the monitor polls immediately instead of waiting a full interval.
    ///
    /// Expected: one probe and one "down" notification before `start_monitor` returns
    #[tokio::test(flavor = "multi_thread")]
    async fn start_polls_immediately() {
        let probe = ScriptedProbe::new(vec![unreachable("Status 500")]);
        let notifier = RecordingNotifier::new();
        let monitor = Arc::new(monitor_with(probe.clone(), notifier.clone()));

        let handle = start_monitor(monitor.clone(), Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(probe.calls(), 1);
        assert_eq!(notifier.delivered().await.len(), 1);
        assert!(!monitor.is_up().await);

        handle.stop().await.unwrap();
    }

    /// Tests that stopping the handle halts the monitor so later polls do nothing.
    ///
    /// Expected: monitor halted, manual poll after stop does not probe
    #[tokio::test(flavor = "multi_thread")]
    async fn stop_halts_monitor() {
        let probe = ScriptedProbe::new(Vec::new());
        let monitor = Arc::new(monitor_with(probe.clone(), RecordingNotifier::new()));

        let handle = start_monitor(monitor.clone(), Duration::from_secs(3600))
            .await
            .unwrap();
        handle.stop().await.unwrap();

        assert!(monitor.is_halted());
        assert_eq!(monitor.poll().await, None);
        assert_eq!(probe.calls(), 1);
    }

    /// Tests that the job keeps polling on its interval and stops firing once stopped.
    ///
    /// Expected: at least three probes over 3.5s of 1s ticks, no new probes after stop
    #[tokio::test(flavor = "multi_thread")]
    async fn repeats_on_interval_until_stopped() {
        let probe = ScriptedProbe::new(vec![unreachable("Status 503")]);
        let notifier = RecordingNotifier::new();
        let monitor = Arc::new(monitor_with(probe.clone(), notifier.clone()));

        let handle = start_monitor(monitor, Duration::from_secs(1))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(3500)).await;
        handle.stop().await.unwrap();

        let calls_at_stop = probe.calls();
        assert!(calls_at_stop >= 3, "only {} polls ran", calls_at_stop);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(probe.calls(), calls_at_stop);
        // down on the first poll, back up on the second, then silent
        assert_eq!(notifier.delivered().await.len(), 2);
    }
}
