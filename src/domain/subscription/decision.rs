//! Action determination over the full reconciliation input.
//!
//! Priority order:
//! 1. Pending transaction on the target plan -> retry the existing payment.
//! 2. Pending transaction on a different plan -> cancel-and-downgrade (free
//!    target) or replace-pending, both requiring explicit confirmation.
//! 3. No pending transactions -> pure plan comparison and payment routing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

use super::{
    compare_plans, first_active_subscription, reconcile_pending, should_open_payment_page,
    ActionType, PendingTransaction, Plan, PlanCatalog, PurchaseRecord, SubscriptionRecord,
};

/// The reconciled decision for one requested plan change.
///
/// Transient - computed per user interaction, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDecision {
    pub action: ActionType,

    pub requires_payment: bool,

    /// Signed price delta toward the target.
    pub price_change: Money,

    /// False for business-rule denials (e.g. target is the current plan).
    pub can_proceed: bool,

    /// Whether execution must route through the hosted payment page.
    pub needs_payment_page: bool,

    /// Whether the executor may run without further user confirmation.
    /// Always false when an existing pending transaction must be destroyed.
    pub auto_execute: bool,

    /// User-facing description, in Hebrew.
    pub message: String,

    pub current_plan: Option<Plan>,

    pub target_plan: Plan,

    /// Pending attempt on the target plan, for payment retry.
    pub pending_transaction: Option<PendingTransaction>,

    /// Pending attempt on another plan that must be cancelled first.
    pub pending_switch_to_cancel: Option<PendingTransaction>,
}

/// Reconciles the user's subscription state against a requested target plan.
///
/// `purchases` ordering matters for current-plan resolution: the first
/// completed unexpired subscription purchase wins.
pub fn determine_subscription_action(
    target: &Plan,
    purchases: &[PurchaseRecord],
    subscriptions: &[SubscriptionRecord],
    catalog: &PlanCatalog,
) -> ActionDecision {
    let current_plan = first_active_subscription(purchases)
        .and_then(|p| catalog.find(&p.purchasable_id))
        .cloned();

    let pending = reconcile_pending(subscriptions, purchases, catalog);

    // 1. Pending attempt on the exact target plan: resume instead of
    //    creating a duplicate.
    if let Some(same_plan) = pending.iter().find(|t| t.plan_id == target.id) {
        return ActionDecision {
            action: ActionType::RetryPayment,
            requires_payment: target.is_paid(),
            price_change: target.price,
            can_proceed: true,
            needs_payment_page: target.is_paid(),
            auto_execute: false,
            message: "קיים תשלום ממתין למסלול זה. ניתן להשלים את התשלום הקיים".to_string(),
            current_plan,
            target_plan: target.clone(),
            pending_transaction: Some(same_plan.clone()),
            pending_switch_to_cancel: None,
        };
    }

    // 2. Pending attempt on a different plan: never overwrite silently.
    if let Some(other_plan) = pending.first() {
        if other_plan.is_paid() && target.is_free() {
            return ActionDecision {
                action: ActionType::CancelPendingDowngrade,
                requires_payment: false,
                price_change: compare_plans(current_plan.as_ref(), target).price_change,
                can_proceed: true,
                needs_payment_page: false,
                auto_execute: false,
                message: "ביטול המנוי הממתין ומעבר למסלול החינמי".to_string(),
                current_plan,
                target_plan: target.clone(),
                pending_transaction: None,
                pending_switch_to_cancel: Some(other_plan.clone()),
            };
        }

        let comparison = compare_plans(current_plan.as_ref(), target);
        let needs_payment_page = should_open_payment_page(&comparison, target);
        return ActionDecision {
            action: ActionType::ReplacePending,
            requires_payment: comparison.requires_payment,
            price_change: comparison.price_change,
            can_proceed: true,
            needs_payment_page,
            auto_execute: false,
            message: format!("החלפת המנוי הממתין במסלול {}", target.name),
            current_plan,
            target_plan: target.clone(),
            pending_transaction: None,
            pending_switch_to_cancel: Some(other_plan.clone()),
        };
    }

    // 3. No pending transactions: pure comparison.
    let comparison = compare_plans(current_plan.as_ref(), target);

    if comparison.action == ActionType::NoChange {
        return ActionDecision {
            action: ActionType::NoChange,
            requires_payment: false,
            price_change: Money::ZERO,
            can_proceed: false,
            needs_payment_page: false,
            auto_execute: false,
            message: comparison.message,
            current_plan,
            target_plan: target.clone(),
            pending_transaction: None,
            pending_switch_to_cancel: None,
        };
    }

    let needs_payment_page = should_open_payment_page(&comparison, target);
    ActionDecision {
        action: comparison.action,
        requires_payment: comparison.requires_payment,
        price_change: comparison.price_change,
        can_proceed: true,
        needs_payment_page,
        auto_execute: !needs_payment_page,
        message: comparison.message,
        current_plan,
        target_plan: target.clone(),
        pending_transaction: None,
        pending_switch_to_cancel: None,
    }
}
