//! ExecuteActionHandler - carries a plan-change decision out.
//!
//! Sequencing is strict: an existing pending switch is cancelled before any
//! new work starts, and a cancellation failure aborts the whole operation.
//! The steps are not transactional; there is no compensation if a later
//! step fails after cancellation succeeded.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, TransactionId};
use crate::domain::subscription::{ActionDecision, ActionType, SubscriptionError};
use crate::ports::{
    ApiError, ChangePlanRequest, CreatePaymentRequest, PaymentGateway, PaymentProcess,
    SubscriptionApi,
};

/// Result of executing a plan-change decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Plan change applied without a gateway round-trip.
    Completed { message: String },

    /// User must be redirected to the hosted checkout page. Carries the
    /// created records so callers can poll completion.
    RedirectToPayment {
        payment_url: String,
        subscription_id: SubscriptionId,
        transaction_id: TransactionId,
    },
}

/// Handler that executes an [`ActionDecision`].
pub struct ExecuteActionHandler {
    api: Arc<dyn SubscriptionApi>,
    gateway: Arc<dyn PaymentGateway>,
}

impl ExecuteActionHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { api, gateway }
    }

    pub async fn handle(
        &self,
        decision: &ActionDecision,
    ) -> Result<ExecutionOutcome, SubscriptionError> {
        if !decision.can_proceed {
            return Err(SubscriptionError::cannot_proceed(decision.message.clone()));
        }

        // Tear down the conflicting pending transaction first. Failure here
        // must stop everything: no new subscription work while the old
        // attempt is still alive.
        if let Some(pending) = &decision.pending_switch_to_cancel {
            self.api
                .cancel_pending(&pending.record)
                .await
                .map_err(|e| {
                    tracing::error!(
                        error = %e,
                        pending_id = %pending.record.id_string(),
                        "failed to cancel pending subscription"
                    );
                    SubscriptionError::PendingCancellationFailed
                })?;

            tracing::info!(
                pending_id = %pending.record.id_string(),
                plan_id = %pending.plan_id,
                "pending subscription cancelled"
            );
        }

        if decision.needs_payment_page {
            self.create_payment_process(decision).await
        } else {
            self.execute_direct_plan_change(decision).await
        }
    }

    /// Creates a payment process against the gateway and maps its three
    /// sub-outcomes.
    async fn create_payment_process(
        &self,
        decision: &ActionDecision,
    ) -> Result<ExecutionOutcome, SubscriptionError> {
        let request = CreatePaymentRequest {
            subscription_plan_id: decision.target_plan.id,
            action_type: decision.action,
            upgrade_from: decision.current_plan.as_ref().map(|p| p.id),
            existing_subscription_id: decision
                .pending_transaction
                .as_ref()
                .and_then(|t| t.record.subscription_id()),
            retry_payment: decision.action == ActionType::RetryPayment,
        };

        let process = self
            .gateway
            .create_subscription_payment(request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    plan_id = %decision.target_plan.id,
                    "failed to create payment process"
                );
                match e {
                    ApiError::MalformedResponse(_) => SubscriptionError::MalformedResponse,
                    _ => SubscriptionError::PaymentProcessFailed,
                }
            })?;

        match process {
            PaymentProcess::Completed { is_free } => {
                tracing::info!(
                    plan_id = %decision.target_plan.id,
                    is_free,
                    "payment process completed without redirect"
                );
                Ok(ExecutionOutcome::Completed {
                    message: "ההרשמה הושלמה בהצלחה".to_string(),
                })
            }
            PaymentProcess::Redirect {
                payment_url,
                subscription_id,
                transaction_id,
            } => {
                tracing::info!(
                    plan_id = %decision.target_plan.id,
                    %subscription_id,
                    %transaction_id,
                    "redirecting to payment page"
                );
                Ok(ExecutionOutcome::RedirectToPayment {
                    payment_url,
                    subscription_id,
                    transaction_id,
                })
            }
        }
    }

    /// Applies the plan change synchronously, without the gateway.
    async fn execute_direct_plan_change(
        &self,
        decision: &ActionDecision,
    ) -> Result<ExecutionOutcome, SubscriptionError> {
        let request = ChangePlanRequest {
            subscription_plan_id: decision.target_plan.id,
            action_type: decision.action,
            from_plan_id: decision.current_plan.as_ref().map(|p| p.id),
        };

        let response = self.api.change_plan(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                plan_id = %decision.target_plan.id,
                "direct plan change failed"
            );
            SubscriptionError::PlanChangeFailed
        })?;

        if !response.success {
            tracing::error!(
                plan_id = %decision.target_plan.id,
                message = ?response.message,
                "backend rejected plan change"
            );
            return Err(SubscriptionError::PlanChangeFailed);
        }

        Ok(ExecutionOutcome::Completed {
            message: response
                .message
                .unwrap_or_else(|| "המסלול עודכן בהצלחה".to_string()),
        })
    }
}
