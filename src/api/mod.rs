//! Client module for the listings backend REST API

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
