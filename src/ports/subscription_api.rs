//! Backend subscription API port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, UserId};
use crate::domain::subscription::{
    ActionType, PendingRecordId, Plan, PurchaseRecord, SubscriptionRecord,
};

use super::ApiError;

/// Port for the platform's subscription endpoints.
///
/// Covers the reconciliation reads (plans, subscriptions, purchases) and the
/// two non-gateway mutations: direct plan change and pending cancellation.
#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    /// Fetches the plan catalog.
    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError>;

    /// Fetches the user's subscription records, newest first.
    async fn list_subscriptions(&self, user_id: &UserId)
        -> Result<Vec<SubscriptionRecord>, ApiError>;

    /// Fetches the user's purchase records, newest first.
    async fn list_purchases(&self, user_id: &UserId) -> Result<Vec<PurchaseRecord>, ApiError>;

    /// Applies a plan change synchronously, without the payment gateway.
    /// Used for downgrades, lateral moves, and free-plan activation.
    async fn change_plan(&self, request: ChangePlanRequest)
        -> Result<ChangePlanResponse, ApiError>;

    /// Cancels a pending subscription or pending switch by record id.
    async fn cancel_pending(&self, record: &PendingRecordId) -> Result<(), ApiError>;
}

/// Body of `POST /subscriptions/change-plan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePlanRequest {
    pub subscription_plan_id: PlanId,

    pub action_type: ActionType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_plan_id: Option<PlanId>,
}

/// Response of a direct plan change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePlanResponse {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,
}
