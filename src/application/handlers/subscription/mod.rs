//! Subscription flow handlers.
//!
//! - `DetermineActionHandler` - fetches reconciliation inputs and computes
//!   the action decision (no side effects)
//! - `ExecuteActionHandler` - carries a decision out against the backend
//!   and payment gateway

mod determine_action;
mod execute_action;

pub use determine_action::{DetermineActionCommand, DetermineActionHandler};
pub use execute_action::{ExecuteActionHandler, ExecutionOutcome};
