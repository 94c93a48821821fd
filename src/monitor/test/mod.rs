use std::sync::Arc;
use url::Url;

use crate::{
    model::{
        monitor::{ProbeOutcome, Transition},
        notification::NotificationKind,
    },
    monitor::{notifier::Notifier, probe::Probe, HealthMonitor},
};



use fake::{FailingNotifier, GatedProbe, RecordingNotifier, ScriptedProbe};

/// Builds a monitor around arbitrary fakes for a dummy target.
pub(crate) fn monitor_with(probe: Arc<dyn Probe>, notifier: Arc<dyn Notifier>) -> HealthMonitor {
    HealthMonitor::new(
        Url::parse("http://signal.test/").unwrap(),
        probe,
        notifier,
    )
}

pub(crate) fn reachable(status: u16) -> ProbeOutcome {
    ProbeOutcome::Reachable { status }
}

pub(crate) fn unreachable(reason: &str) -> ProbeOutcome {
    ProbeOutcome::Unreachable {
        reason: reason.to_string(),
    }
}
