//! REST implementations of the subscription and payment ports.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::{SubscriptionId, TransactionId, UserId};
use crate::domain::subscription::{PendingRecordId, Plan, PurchaseRecord, SubscriptionRecord};
use crate::ports::{
    ApiError, ChangePlanRequest, ChangePlanResponse, CreatePaymentRequest, PaymentGateway,
    PaymentProcess, SubscriptionApi,
};

use super::{ApiClient, AuthContext};

/// Platform API adapter implementing both subscription and payment ports.
///
/// Constructed per user session with explicit credentials.
pub struct RestPlatformApi {
    client: ApiClient,
    auth: AuthContext,
}

impl RestPlatformApi {
    pub fn new(client: ApiClient, auth: AuthContext) -> Self {
        Self { client, auth }
    }
}

#[async_trait]
impl SubscriptionApi for RestPlatformApi {
    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.client
            .find(&self.auth, "subscription-plans", &[])
            .await
    }

    async fn list_subscriptions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SubscriptionRecord>, ApiError> {
        self.client
            .find(
                &self.auth,
                "subscriptions",
                &[("user_id", user_id.to_string())],
            )
            .await
    }

    async fn list_purchases(&self, user_id: &UserId) -> Result<Vec<PurchaseRecord>, ApiError> {
        self.client
            .find(
                &self.auth,
                "purchases",
                &[("user_id", user_id.to_string())],
            )
            .await
    }

    async fn change_plan(
        &self,
        request: ChangePlanRequest,
    ) -> Result<ChangePlanResponse, ApiError> {
        let value = self
            .client
            .post_json(&self.auth, "subscriptions/change-plan", &request)
            .await?;
        serde_json::from_value(value).map_err(|e| ApiError::malformed(e.to_string()))
    }

    async fn cancel_pending(&self, record: &PendingRecordId) -> Result<(), ApiError> {
        let path = format!("subscriptions/cancel-pending/{}", record.id_string());
        self.client
            .post_json(&self.auth, &path, &Value::Null)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for RestPlatformApi {
    async fn create_subscription_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<PaymentProcess, ApiError> {
        let value = self
            .client
            .post_json(&self.auth, "payments/createSubscriptionPayment", &request)
            .await?;
        parse_payment_response(&value)
    }
}

/// Maps the payment-creation wire response to a typed outcome.
///
/// Two success shapes exist: `{success, data:{isFree, completed}}` for
/// gateway-free completion and `{success, paymentUrl, subscriptionId,
/// transactionId}` for hosted checkout. Anything else is contract drift.
fn parse_payment_response(value: &Value) -> Result<PaymentProcess, ApiError> {
    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !success {
        return Err(ApiError::malformed("payment response missing success flag"));
    }

    if let Some(data) = value.get("data") {
        let completed = data
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if completed {
            let is_free = data.get("isFree").and_then(Value::as_bool).unwrap_or(false);
            return Ok(PaymentProcess::Completed { is_free });
        }
    }

    if let Some(payment_url) = value.get("paymentUrl").and_then(Value::as_str) {
        let subscription_id: SubscriptionId = value
            .get("subscriptionId")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .ok_or_else(|| ApiError::malformed("paymentUrl without subscriptionId"))?;
        let transaction_id: TransactionId = value
            .get("transactionId")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .ok_or_else(|| ApiError::malformed("paymentUrl without transactionId"))?;

        return Ok(PaymentProcess::Redirect {
            payment_url: payment_url.to_string(),
            subscription_id,
            transaction_id,
        });
    }

    Err(ApiError::malformed("unrecognized payment response shape"))
}
