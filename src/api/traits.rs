//! Trait abstraction for the backend client to enable mocking in tests

use super::error::ApiError;
use crate::state::{LoginResponse, Property, PropertyDraft, PropertyFilters, SelectionOption};
use async_trait::async_trait;

/// Operations against the listings backend, mockable in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// List role options for the registration form
    async fn list_roles(&self) -> Result<Vec<SelectionOption>, ApiError>;

    /// List feature options for the property form
    async fn list_features(&self) -> Result<Vec<SelectionOption>, ApiError>;

    /// Search properties; empty filters are omitted from the query
    async fn search_properties(
        &self,
        filters: &PropertyFilters,
    ) -> Result<Vec<Property>, ApiError>;

    /// Authenticate against the admin panel
    async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Register a new user account
    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        phone_number: &str,
        re_password: &str,
        role_id: i64,
    ) -> Result<(), ApiError>;

    /// Create a property record with its image attachments
    async fn create_property(&self, draft: &PropertyDraft) -> Result<(), ApiError>;
}
