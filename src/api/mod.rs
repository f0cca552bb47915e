/// Public API for the upstream REST layer.
pub mod client;
pub mod errors;

pub use client::ApiClient;
pub use errors::ApiError;
