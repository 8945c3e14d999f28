//! Subscription and purchase wire records.
//!
//! Two parallel backend tables can describe the same in-flight transaction:
//! the subscription table and the legacy purchase table. Both record shapes
//! are modeled here; `pending::reconcile_pending` merges them into one view.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PlanId, PurchaseId, SubscriptionId, Timestamp};

use super::SubscriptionStatus;

/// A row from the subscription table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: SubscriptionId,

    /// Plan this subscription points at.
    pub purchasable_id: PlanId,

    pub status: SubscriptionStatus,

    /// End of paid access. `None` for open-ended records.
    pub access_expires_at: Option<Timestamp>,
}

impl SubscriptionRecord {
    /// Returns true while a payment attempt is still open.
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Returns true if access has lapsed.
    pub fn is_expired(&self) -> bool {
        self.access_expires_at.map(|t| t.is_past()).unwrap_or(false)
    }
}

/// What a purchase row paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchasableType {
    /// A subscription plan purchase.
    SubscriptionPlan,

    /// Standalone game content purchase.
    GameContent,

    /// Anything the client doesn't recognize.
    #[serde(other)]
    Unknown,
}

/// Payment state of a purchase row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
}

/// Lifecycle state of a purchase row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Ordinary purchase.
    #[default]
    Normal,

    /// A plan switch awaiting payment completion.
    PendingSwitch,
}

/// A row from the legacy purchase table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: PurchaseId,

    pub purchasable_type: PurchasableType,

    /// Plan reference when `purchasable_type` is a subscription plan.
    pub purchasable_id: PlanId,

    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub status: PurchaseStatus,

    pub price: Money,

    /// End of paid access. `None` for open-ended records.
    pub access_expires_at: Option<Timestamp>,
}

impl PurchaseRecord {
    /// A completed, unexpired subscription purchase - the record that
    /// defines the user's current plan.
    pub fn is_active_subscription(&self) -> bool {
        self.purchasable_type == PurchasableType::SubscriptionPlan
            && self.payment_status == PaymentStatus::Completed
            && !self.is_expired()
    }

    /// A subscription purchase with an open payment attempt or an
    /// uncompleted plan switch.
    pub fn is_pending_subscription(&self) -> bool {
        self.purchasable_type == PurchasableType::SubscriptionPlan
            && (self.payment_status == PaymentStatus::Pending
                || self.status == PurchaseStatus::PendingSwitch)
    }

    fn is_expired(&self) -> bool {
        self.access_expires_at.map(|t| t.is_past()).unwrap_or(false)
    }
}

/// Finds the purchase that defines the user's current subscription.
///
/// Takes the first match. Upstream ordering is assumed to reflect recency;
/// no recency tie-break happens here.
pub fn first_active_subscription(purchases: &[PurchaseRecord]) -> Option<&PurchaseRecord> {
    purchases.iter().find(|p| p.is_active_subscription())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase(
        payment_status: PaymentStatus,
        status: PurchaseStatus,
        expires_in_days: i64,
    ) -> PurchaseRecord {
        PurchaseRecord {
            id: PurchaseId::new(),
            purchasable_type: PurchasableType::SubscriptionPlan,
            purchasable_id: PlanId::new(),
            payment_status,
            status,
            price: Money::from_shekels(29),
            access_expires_at: Some(Timestamp::now().add_days(expires_in_days)),
        }
    }

    #[test]
    fn completed_unexpired_purchase_is_active_subscription() {
        let p = purchase(PaymentStatus::Completed, PurchaseStatus::Normal, 30);
        assert!(p.is_active_subscription());
    }

    #[test]
    fn expired_purchase_is_not_active() {
        let p = purchase(PaymentStatus::Completed, PurchaseStatus::Normal, -1);
        assert!(!p.is_active_subscription());
    }

    #[test]
    fn open_ended_purchase_is_active() {
        let mut p = purchase(PaymentStatus::Completed, PurchaseStatus::Normal, 30);
        p.access_expires_at = None;
        assert!(p.is_active_subscription());
    }

    #[test]
    fn game_content_purchase_is_not_a_subscription() {
        let mut p = purchase(PaymentStatus::Completed, PurchaseStatus::Normal, 30);
        p.purchasable_type = PurchasableType::GameContent;
        assert!(!p.is_active_subscription());
        assert!(!p.is_pending_subscription());
    }

    #[test]
    fn pending_payment_is_pending_subscription() {
        let p = purchase(PaymentStatus::Pending, PurchaseStatus::Normal, 30);
        assert!(p.is_pending_subscription());
    }

    #[test]
    fn pending_switch_is_pending_even_when_paid() {
        let p = purchase(PaymentStatus::Completed, PurchaseStatus::PendingSwitch, 30);
        assert!(p.is_pending_subscription());
    }

    #[test]
    fn first_active_subscription_takes_first_match() {
        let first = purchase(PaymentStatus::Completed, PurchaseStatus::Normal, 30);
        let second = purchase(PaymentStatus::Completed, PurchaseStatus::Normal, 60);
        let purchases = vec![first.clone(), second];

        assert_eq!(first_active_subscription(&purchases), Some(&first));
    }

    #[test]
    fn first_active_subscription_skips_pending_rows() {
        let pending = purchase(PaymentStatus::Pending, PurchaseStatus::Normal, 30);
        let active = purchase(PaymentStatus::Completed, PurchaseStatus::Normal, 30);
        let purchases = vec![pending, active.clone()];

        assert_eq!(first_active_subscription(&purchases), Some(&active));
    }

    #[test]
    fn unknown_purchasable_type_deserializes() {
        let json = format!(
            r#"{{"id":"{}","purchasable_type":"course_bundle","purchasable_id":"{}","payment_status":"completed","price":0,"access_expires_at":null}}"#,
            PurchaseId::new(),
            PlanId::new()
        );
        let p: PurchaseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(p.purchasable_type, PurchasableType::Unknown);
        assert_eq!(p.status, PurchaseStatus::Normal);
    }
}
