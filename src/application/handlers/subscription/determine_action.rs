//! DetermineActionHandler - computes the plan-change decision for a user.

use std::sync::Arc;

use crate::domain::foundation::{PlanId, UserId};
use crate::domain::subscription::{
    determine_subscription_action, ActionDecision, PlanCatalog, SubscriptionError,
};
use crate::ports::SubscriptionApi;

/// Command to compute the decision for a requested plan change.
#[derive(Debug, Clone)]
pub struct DetermineActionCommand {
    pub user_id: UserId,
    pub target_plan_id: PlanId,
}

/// Handler that fetches the reconciliation inputs and runs the decision
/// logic. Read-only - nothing is mutated until the decision is executed.
pub struct DetermineActionHandler {
    api: Arc<dyn SubscriptionApi>,
}

impl DetermineActionHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        cmd: DetermineActionCommand,
    ) -> Result<ActionDecision, SubscriptionError> {
        let plans = self.api.list_plans().await.map_err(|e| {
            tracing::error!(error = %e, "failed to fetch plan catalog");
            SubscriptionError::FetchFailed
        })?;
        let catalog = PlanCatalog::new(plans);

        let target = catalog
            .find(&cmd.target_plan_id)
            .cloned()
            .ok_or(SubscriptionError::PlanNotFound(cmd.target_plan_id))?;

        // Independent reads, fetched concurrently.
        let (subscriptions, purchases) = futures::try_join!(
            self.api.list_subscriptions(&cmd.user_id),
            self.api.list_purchases(&cmd.user_id),
        )
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %cmd.user_id, "failed to fetch subscription state");
            SubscriptionError::FetchFailed
        })?;

        let decision = determine_subscription_action(&target, &purchases, &subscriptions, &catalog);

        tracing::debug!(
            user_id = %cmd.user_id,
            target_plan = %target.id,
            action = ?decision.action,
            can_proceed = decision.can_proceed,
            needs_payment_page = decision.needs_payment_page,
            "plan change decision computed"
        );

        Ok(decision)
    }
}
