//! Subscription status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Status of a subscription record in the payment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Payment attempt in flight; not yet granting access.
    Pending,

    /// Paid (or free) subscription granting access.
    Active,

    /// Cancelled. Pending records are cancelled when abandoned or replaced.
    Cancelled,
}

impl SubscriptionStatus {
    /// Returns true while a payment attempt is still open.
    pub fn is_pending(&self) -> bool {
        matches!(self, SubscriptionStatus::Pending)
    }

    /// Returns true if this status grants access.
    pub fn has_access(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

impl StateMachine for SubscriptionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubscriptionStatus::*;
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Cancelled) | (Active, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubscriptionStatus::*;
        match self {
            Pending => vec![Active, Cancelled],
            Active => vec![Cancelled],
            Cancelled => vec![],
        }
    }
}
