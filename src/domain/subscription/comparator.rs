//! Pure plan comparison and payment routing.
//!
//! `compare_plans` implements the plan decision table; `should_open_payment_page`
//! decides whether an action needs the hosted checkout round-trip. Both are
//! pure functions with no collaborator access.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

use super::Plan;

/// Action selected for a plan-change request.
///
/// The first five variants come from pure plan comparison; the last three
/// arise when pending transactions are in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    NewSubscription,
    NoChange,
    Upgrade,
    Downgrade,
    LateralMove,

    /// Resume an existing payment attempt for the same plan.
    RetryPayment,

    /// Cancel a pending switch toward another plan, then proceed with the
    /// requested one.
    ReplacePending,

    /// Cancel a pending paid subscription and activate the free plan.
    CancelPendingDowngrade,
}

impl ActionType {
    /// Returns true for actions that tear down an existing pending
    /// transaction and therefore demand explicit user confirmation.
    pub fn destroys_pending(&self) -> bool {
        matches!(
            self,
            ActionType::ReplacePending | ActionType::CancelPendingDowngrade
        )
    }
}

/// Result of comparing the current plan against a requested target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanComparison {
    pub action: ActionType,

    /// Whether the change increases what the user owes.
    pub requires_payment: bool,

    /// Signed price delta (negative for downgrades).
    pub price_change: Money,

    /// User-facing description of the change, in Hebrew.
    pub message: String,
}

/// Compares the user's current plan (if any) against the requested target.
///
/// | condition | action | requires_payment |
/// |---|---|---|
/// | no current plan | NewSubscription | target is paid |
/// | same plan id | NoChange | false |
/// | target costs more | Upgrade | true |
/// | target costs less | Downgrade | false |
/// | equal price, different plan | LateralMove | false |
pub fn compare_plans(current: Option<&Plan>, target: &Plan) -> PlanComparison {
    let current = match current {
        None => {
            return PlanComparison {
                action: ActionType::NewSubscription,
                requires_payment: target.is_paid(),
                price_change: target.price,
                message: format!("הצטרפות למסלול {}", target.name),
            }
        }
        Some(plan) => plan,
    };

    if current.id == target.id {
        return PlanComparison {
            action: ActionType::NoChange,
            requires_payment: false,
            price_change: Money::ZERO,
            message: "זהו המסלול הנוכחי שלך".to_string(),
        };
    }

    let delta = target.price - current.price;
    if delta.is_positive() {
        PlanComparison {
            action: ActionType::Upgrade,
            requires_payment: true,
            price_change: delta,
            message: format!("שדרוג למסלול {}", target.name),
        }
    } else if delta < Money::ZERO {
        PlanComparison {
            action: ActionType::Downgrade,
            requires_payment: false,
            price_change: delta,
            message: format!("מעבר למסלול {}", target.name),
        }
    } else {
        PlanComparison {
            action: ActionType::LateralMove,
            requires_payment: false,
            price_change: Money::ZERO,
            message: format!("מעבר למסלול {}", target.name),
        }
    }
}

/// Decides whether an action must route through the hosted payment page.
///
/// Free target plans never need the page, even when a paid pending
/// transaction is being cancelled first. Downgrades and lateral moves don't
/// increase what the user owes, so the backend applies them synchronously.
pub fn should_open_payment_page(comparison: &PlanComparison, target: &Plan) -> bool {
    if target.is_free() {
        return false;
    }

    matches!(
        comparison.action,
        ActionType::Upgrade | ActionType::NewSubscription
    ) && comparison.requires_payment
}
