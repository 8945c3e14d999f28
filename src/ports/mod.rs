//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubscriptionApi` - backend subscription endpoints (reads, plan change,
//!   pending cancellation)
//! - `PaymentGateway` - payment-process creation against the hosted gateway

mod errors;
mod payment_gateway;
mod subscription_api;

pub use errors::ApiError;
pub use payment_gateway::{CreatePaymentRequest, PaymentGateway, PaymentProcess};
pub use subscription_api::{ChangePlanRequest, ChangePlanResponse, SubscriptionApi};
