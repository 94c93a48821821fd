use crate::model::monitor::{ProbeOutcome, Transition};

/// Up/down belief of a health monitor.
///
/// Starts optimistic (`is_up = true`). A restart during an outage therefore stays silent
/// until the target recovers and fails again.
#[derive(Debug)]
pub struct MonitorState {
    is_up: bool,
}

impl MonitorState {
    /// Creates a new state with the initial "up" belief.
    pub fn new() -> Self {
        Self { is_up: true }
    }

    pub fn is_up(&self) -> bool {
        self.is_up
    }

    /// Folds a probe outcome into the belief.
    ///
    /// Flips the belief when the outcome disagrees with it and reports the edge. An
    /// outcome that agrees with the current belief leaves the state untouched.
    ///
    /// # Arguments
    /// - `outcome` - Classified result of the latest probe
    ///
    /// # Returns
    /// - `Some(Transition::WentDown)` - Was up, probe failed
    /// - `Some(Transition::CameBack)` - Was down, probe succeeded
    /// - `None` - Outcome matches the current belief
    pub fn observe(&mut self, outcome: &ProbeOutcome) -> Option<Transition> {
        match (self.is_up, outcome) {
            (true, ProbeOutcome::Unreachable { reason }) => {
                self.is_up = false;
                Some(Transition::WentDown {
                    reason: reason.clone(),
                })
            }
            (false, ProbeOutcome::Reachable { status }) => {
                self.is_up = true;
                Some(Transition::CameBack { status: *status })
            }
            _ => None,
        }
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up() -> ProbeOutcome {
        ProbeOutcome::Reachable { status: 200 }
    }

    fn down() -> ProbeOutcome {
        ProbeOutcome::Unreachable {
            reason: "Status 500".to_string(),
        }
    }

    fn transitions(outcomes: &[ProbeOutcome]) -> Vec<Transition> {
        let mut state = MonitorState::new();
        outcomes.iter().filter_map(|o| state.observe(o)).collect()
    }

    #[test]
    fn starts_up() {
        assert!(MonitorState::new().is_up());
    }

    /// Expected: no transitions while the target stays up
    #[test]
    fn steady_up_is_silent() {
        assert!(transitions(&[up(), up(), up()]).is_empty());
    }

    /// Tests that the first failure after startup is reported as "down", never as a recovery.
    ///
    /// Expected: exactly one WentDown
    #[test]
    fn first_failure_goes_down() {
        let mut state = MonitorState::new();

        let transition = state.observe(&down());

        assert_eq!(
            transition,
            Some(Transition::WentDown {
                reason: "Status 500".to_string()
            })
        );
        assert!(!state.is_up());
    }

    /// Expected: one WentDown after the first failure, one CameBack after the recovery
    #[test]
    fn down_then_recovery_emits_two_edges() {
        let result = transitions(&[up(), down(), down(), up()]);

        assert_eq!(
            result,
            vec![
                Transition::WentDown {
                    reason: "Status 500".to_string()
                },
                Transition::CameBack { status: 200 },
            ]
        );
    }

    /// Tests that repeated failures after the first one do not produce more edges.
    #[test]
    fn repeated_failures_emit_once() {
        let outcomes: Vec<ProbeOutcome> = std::iter::repeat_with(down).take(25).collect();

        assert_eq!(transitions(&outcomes).len(), 1);
    }
}
