//! HTTP adapters over the platform REST API.

mod api_client;
mod rest_api;

pub use api_client::{ApiClient, AuthContext};
pub use rest_api::RestPlatformApi;
