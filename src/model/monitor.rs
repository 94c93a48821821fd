/// Classified result of a single reachability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Target answered with a 2xx or 3xx status.
    Reachable {
        /// HTTP status code of the response
        status: u16,
    },
    /// Target answered with any other status, failed to connect or timed out.
    Unreachable {
        /// Human-readable failure description
        reason: String,
    },
}

/// A change of the monitor's up/down belief.
///
/// Produced only on an edge; consecutive identical outcomes never yield a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Belief went from up to down.
    WentDown {
        /// Failure description from the probe that caused the transition
        reason: String,
    },
    /// Belief went from down to up.
    CameBack {
        /// Status code from the probe that caused the transition
        status: u16,
    },
}
