//! Shared domain building blocks.
//!
//! Value objects and traits used across the subscription and games domains:
//! typed identifiers, timestamps, money, and the state machine trait.

mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{PlanId, PurchaseId, SubscriptionId, TransactionId, UserId};
pub use money::Money;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
