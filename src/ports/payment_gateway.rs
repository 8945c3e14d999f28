//! Payment gateway port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, SubscriptionId, TransactionId};
use crate::domain::subscription::ActionType;

use super::ApiError;

/// Port for creating payment processes against the hosted gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a subscription payment process.
    ///
    /// Free plans complete immediately; paid plans come back with a
    /// redirect URL to the hosted checkout page.
    async fn create_subscription_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<PaymentProcess, ApiError>;
}

/// Body of `POST /payments/createSubscriptionPayment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub subscription_plan_id: PlanId,

    pub action_type: ActionType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_from: Option<PlanId>,

    /// Pending subscription to resume, for payment retries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_subscription_id: Option<SubscriptionId>,

    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub retry_payment: bool,
}

/// Outcome of payment-process creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentProcess {
    /// Completed without a gateway round-trip (free plans).
    Completed { is_free: bool },

    /// User must be redirected to the hosted checkout page.
    Redirect {
        payment_url: String,
        subscription_id: SubscriptionId,
        transaction_id: TransactionId,
    },
}
