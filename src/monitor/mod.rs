//! Edge-triggered health monitor for the signal server.
//!
//! The `HealthMonitor` probes a fixed target, keeps a binary up/down belief and hands a
//! notification to its notifier exactly when that belief flips. Steady state is silent:
//! a target that stays down produces one "down" notification no matter how many polls
//! fail in a row.
//!
//! The monitor is passive; it does nothing until `poll()` is called. Periodic polling is
//! wired up by `scheduler::health_monitor`, and the bot's `/checkserver` command uses
//! `check()` for one-off probes that leave the belief alone.
//!
//! # Failure handling
//!
//! - Probe failures (bad status, refused connection, timeout) are classified as
//!   unreachable and never returned as errors.
//! - Notification delivery failures are logged and dropped. The belief flip that
//!   triggered the notification stands and delivery is not retried.

pub mod notifier;
pub mod probe;
pub mod state;

#[cfg(test)]
pub(crate) mod test;

use dioxus_logger::tracing;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::{
    model::{
        monitor::{ProbeOutcome, Transition},
        notification::Notification,
    },
    monitor::{notifier::Notifier, probe::Probe, state::MonitorState},
};

/// Polls a target and announces reachability transitions.
pub struct HealthMonitor {
    /// Endpoint being probed, used for log lines and status reports
    target: Url,
    /// Performs the actual reachability check
    probe: Arc<dyn Probe>,
    /// Receives a notification on every belief transition
    notifier: Arc<dyn Notifier>,
    /// Current up/down belief
    state: RwLock<MonitorState>,
    /// Held for the duration of a poll so overlapping ticks are skipped
    in_flight: Mutex<()>,
    /// Set once the monitor is stopped; results of in-flight probes are discarded
    halted: AtomicBool,
}

impl HealthMonitor {
    /// Creates a new monitor with the initial "up" belief.
    ///
    /// # Arguments
    /// - `target` - URL the probe checks
    /// - `probe` - Reachability check implementation
    /// - `notifier` - Sink for transition notifications
    ///
    /// # Returns
    /// - `HealthMonitor` - Idle monitor, call `poll()` or hand it to the scheduler
    pub fn new(target: Url, probe: Arc<dyn Probe>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            target,
            probe,
            notifier,
            state: RwLock::new(MonitorState::new()),
            in_flight: Mutex::new(()),
            halted: AtomicBool::new(false),
        }
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Returns the current reachability belief.
    pub async fn is_up(&self) -> bool {
        self.state.read().await.is_up()
    }

    pub fn is_halted(&self) -> bool {
        self.halted.load(Ordering::SeqCst)
    }

    /// Stops the monitor from acting on any further probe results.
    ///
    /// A poll whose probe is still in flight completes, but its outcome is discarded.
    pub fn halt(&self) {
        self.halted.store(true, Ordering::SeqCst);
    }

    /// Runs one probe without touching the belief or notifying.
    pub async fn check(&self) -> ProbeOutcome {
        self.probe.probe().await
    }

    /// Probes the target once and notifies on a belief transition.
    ///
    /// Skips the tick when a previous poll is still in flight or the monitor has been
    /// halted. Notification errors are logged and swallowed, the belief is updated before
    /// delivery is attempted.
    ///
    /// # Returns
    /// - `Some(Transition)` - The belief flipped during this poll
    /// - `None` - Belief unchanged, tick skipped or monitor halted
    pub async fn poll(&self) -> Option<Transition> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::debug!(
                "Previous poll of {} still running, skipping tick",
                self.target
            );
            return None;
        };

        if self.is_halted() {
            return None;
        }

        let outcome = self.probe.probe().await;

        if self.is_halted() {
            tracing::debug!(
                "Monitor for {} halted during probe, discarding result",
                self.target
            );
            return None;
        }

        match &outcome {
            ProbeOutcome::Reachable { status } => {
                tracing::info!("[OK] Server UP ({}) - {}", status, self.target)
            }
            ProbeOutcome::Unreachable { reason } => {
                tracing::warn!("[ERROR] Server DOWN: {} - {}", reason, self.target)
            }
        }

        let transition = self.state.write().await.observe(&outcome)?;

        self.announce(&Notification::from(&transition)).await;

        Some(transition)
    }

    /// Delivers a notification through the monitor's notifier, logging any failure.
    pub async fn announce(&self, notification: &Notification) {
        if let Err(e) = self.notifier.notify(notification).await {
            tracing::error!(
                "Failed to deliver {:?} notification for {}: {}",
                notification.kind,
                self.target,
                e
            );
        }
    }
}
