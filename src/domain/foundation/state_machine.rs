//! Validated state transitions for lifecycle status enums.

use super::ValidationError;

/// Status enums with a fixed transition graph implement this to get a
/// validated `transition_to` and terminal-state detection.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Whether moving from `self` to `target` is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// All states reachable in one step from `self`.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to `target`, rejecting transitions the graph doesn't allow.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "status",
                format!("transition {:?} -> {:?} is not allowed", self, target),
            ))
        }
    }

    /// A state with no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal payment-attempt lifecycle to exercise the defaults.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum AttemptStatus {
        Open,
        Settled,
        Abandoned,
    }

    impl StateMachine for AttemptStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use AttemptStatus::*;
            matches!((self, target), (Open, Settled) | (Open, Abandoned))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use AttemptStatus::*;
            match self {
                Open => vec![Settled, Abandoned],
                Settled | Abandoned => vec![],
            }
        }
    }

    #[test]
    fn allowed_transition_returns_target() {
        let result = AttemptStatus::Open.transition_to(AttemptStatus::Settled);
        assert_eq!(result, Ok(AttemptStatus::Settled));
    }

    #[test]
    fn settled_attempt_cannot_reopen() {
        assert!(AttemptStatus::Settled
            .transition_to(AttemptStatus::Open)
            .is_err());
    }

    #[test]
    fn both_end_states_are_terminal() {
        assert!(AttemptStatus::Settled.is_terminal());
        assert!(AttemptStatus::Abandoned.is_terminal());
        assert!(!AttemptStatus::Open.is_terminal());
    }
}
