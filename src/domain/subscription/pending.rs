//! Reconciled pending-transaction view.
//!
//! The backend exposes in-flight payment attempts through two tables: the
//! subscription table and the legacy purchase table. The same attempt can
//! appear in both. This module assembles one deduplicated view at the
//! boundary so decision code never re-derives precedence ad hoc.
//!
//! Precedence: when both tables carry a pending record for the same plan,
//! the subscription-table record wins.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PlanId, PurchaseId, SubscriptionId};

use super::{PlanCatalog, PurchaseRecord, SubscriptionRecord};

/// Which backend record a pending transaction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingRecordId {
    /// Subscription-table record.
    Subscription(SubscriptionId),

    /// Legacy purchase-table record.
    Purchase(PurchaseId),
}

impl PendingRecordId {
    /// Id string used in cancel-pending endpoint paths.
    pub fn id_string(&self) -> String {
        match self {
            PendingRecordId::Subscription(id) => id.to_string(),
            PendingRecordId::Purchase(id) => id.to_string(),
        }
    }

    /// Subscription-table id, when this came from the subscription table.
    pub fn subscription_id(&self) -> Option<SubscriptionId> {
        match self {
            PendingRecordId::Subscription(id) => Some(*id),
            PendingRecordId::Purchase(_) => None,
        }
    }
}

/// One in-flight payment attempt toward a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// Record the attempt is tracked by.
    pub record: PendingRecordId,

    /// Plan the attempt targets.
    pub plan_id: PlanId,

    /// Price of the targeted plan.
    pub price: Money,
}

impl PendingTransaction {
    /// Returns true when the attempt targets a paid plan.
    pub fn is_paid(&self) -> bool {
        self.price.is_positive()
    }
}

/// Assembles the deduplicated pending-transaction view.
///
/// Subscription-table records are taken first; purchase-table records are
/// only added for plans with no subscription-table entry.
pub fn reconcile_pending(
    subscriptions: &[SubscriptionRecord],
    purchases: &[PurchaseRecord],
    catalog: &PlanCatalog,
) -> Vec<PendingTransaction> {
    let mut pending: Vec<PendingTransaction> = subscriptions
        .iter()
        .filter(|s| s.is_pending())
        .map(|s| PendingTransaction {
            record: PendingRecordId::Subscription(s.id),
            plan_id: s.purchasable_id,
            price: catalog
                .find(&s.purchasable_id)
                .map(|p| p.price)
                .unwrap_or(Money::ZERO),
        })
        .collect();

    for purchase in purchases.iter().filter(|p| p.is_pending_subscription()) {
        let already_covered = pending.iter().any(|t| t.plan_id == purchase.purchasable_id);
        if !already_covered {
            pending.push(PendingTransaction {
                record: PendingRecordId::Purchase(purchase.id),
                plan_id: purchase.purchasable_id,
                price: purchase.price,
            });
        }
    }

    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::{
        PaymentStatus, Plan, PurchasableType, PurchaseStatus, SubscriptionStatus,
    };

    fn pending_subscription(plan_id: PlanId) -> SubscriptionRecord {
        SubscriptionRecord {
            id: SubscriptionId::new(),
            purchasable_id: plan_id,
            status: SubscriptionStatus::Pending,
            access_expires_at: None,
        }
    }

    fn pending_purchase(plan_id: PlanId, price: Money) -> PurchaseRecord {
        PurchaseRecord {
            id: PurchaseId::new(),
            purchasable_type: PurchasableType::SubscriptionPlan,
            purchasable_id: plan_id,
            payment_status: PaymentStatus::Pending,
            status: PurchaseStatus::Normal,
            price,
            access_expires_at: None,
        }
    }

    fn catalog_with(plan_id: PlanId, price: Money) -> PlanCatalog {
        PlanCatalog::new(vec![Plan::new(plan_id, "Plan", price)])
    }

    #[test]
    fn subscription_record_wins_over_purchase_for_same_plan() {
        let plan_id = PlanId::new();
        let sub = pending_subscription(plan_id);
        let purchase = pending_purchase(plan_id, Money::from_shekels(29));
        let catalog = catalog_with(plan_id, Money::from_shekels(29));

        let pending = reconcile_pending(&[sub.clone()], &[purchase], &catalog);

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].record, PendingRecordId::Subscription(sub.id));
    }

    #[test]
    fn purchase_record_used_when_no_subscription_entry() {
        let plan_id = PlanId::new();
        let purchase = pending_purchase(plan_id, Money::from_shekels(29));
        let catalog = catalog_with(plan_id, Money::from_shekels(29));

        let pending = reconcile_pending(&[], &[purchase.clone()], &catalog);

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].record, PendingRecordId::Purchase(purchase.id));
        assert_eq!(pending[0].price, Money::from_shekels(29));
    }

    #[test]
    fn different_plans_both_survive() {
        let plan_a = PlanId::new();
        let plan_b = PlanId::new();
        let sub = pending_subscription(plan_a);
        let purchase = pending_purchase(plan_b, Money::from_shekels(49));
        let catalog = catalog_with(plan_a, Money::from_shekels(29));

        let pending = reconcile_pending(&[sub], &[purchase], &catalog);

        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].plan_id, plan_a);
        assert_eq!(pending[1].plan_id, plan_b);
    }

    #[test]
    fn active_and_cancelled_records_are_ignored() {
        let plan_id = PlanId::new();
        let mut active = pending_subscription(plan_id);
        active.status = SubscriptionStatus::Active;
        let mut cancelled = pending_subscription(plan_id);
        cancelled.status = SubscriptionStatus::Cancelled;
        let catalog = catalog_with(plan_id, Money::from_shekels(29));

        let pending = reconcile_pending(&[active, cancelled], &[], &catalog);
        assert!(pending.is_empty());
    }

    #[test]
    fn subscription_price_comes_from_catalog() {
        let plan_id = PlanId::new();
        let sub = pending_subscription(plan_id);
        let catalog = catalog_with(plan_id, Money::from_shekels(79));

        let pending = reconcile_pending(&[sub], &[], &catalog);
        assert_eq!(pending[0].price, Money::from_shekels(79));
        assert!(pending[0].is_paid());
    }

    #[test]
    fn pending_switch_purchase_is_included() {
        let plan_id = PlanId::new();
        let mut purchase = pending_purchase(plan_id, Money::from_shekels(29));
        purchase.payment_status = PaymentStatus::Completed;
        purchase.status = PurchaseStatus::PendingSwitch;
        let catalog = catalog_with(plan_id, Money::from_shekels(29));

        let pending = reconcile_pending(&[], &[purchase], &catalog);
        assert_eq!(pending.len(), 1);
    }
}
