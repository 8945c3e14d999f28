//! Subscription domain module.
//!
//! The plan reconciliation engine: given a user's current subscription,
//! their in-flight payment attempts, and a requested target plan, decide
//! which action to take and how it must be routed (payment page vs direct
//! execution).
//!
//! # Module Structure
//!
//! - `plan` - Plan reference data and catalog lookup
//! - `status` - SubscriptionStatus state machine
//! - `records` - Subscription and Purchase wire records
//! - `pending` - Reconciled pending-transaction view
//! - `comparator` - Pure plan comparison and payment routing
//! - `decision` - Action determination over all inputs

mod comparator;
mod decision;
mod errors;
mod pending;
mod plan;
mod records;
mod status;

pub use comparator::{compare_plans, should_open_payment_page, ActionType, PlanComparison};
pub use decision::{determine_subscription_action, ActionDecision};
pub use errors::SubscriptionError;
pub use pending::{reconcile_pending, PendingRecordId, PendingTransaction};
pub use plan::{Plan, PlanCatalog};
pub use records::{
    first_active_subscription, PaymentStatus, PurchasableType, PurchaseRecord, PurchaseStatus,
    SubscriptionRecord,
};
pub use status::SubscriptionStatus;
