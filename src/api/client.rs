//! REST client for the Labyrinth listings backend
//!
//! Thin wrapper over reqwest. Timeouts stay at the client defaults and
//! in-flight calls are never cancelled; serialization of submissions is
//! handled above this layer by the form's submission machine.

use super::error::ApiError;
use super::traits::ApiClientTrait;
use crate::state::{LoginResponse, Property, PropertyDraft, PropertyFilters, SelectionOption};
use async_trait::async_trait;
use reqwest::multipart;
use serde::Serialize;

/// Registration request body, field names as the backend expects them
#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
    #[serde(rename = "phoneNumber")]
    phone_number: &'a str,
    #[serde(rename = "rePassword")]
    re_password: &'a str,
    #[serde(rename = "roleId")]
    role_id: i64,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the listings backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    /// Bearer token of the active admin session, if any
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Attach or drop the session token sent on admin calls
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into an [`ApiError`]
    async fn rejection(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_error_body(status, &body)
    }
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn list_roles(&self) -> Result<Vec<SelectionOption>, ApiError> {
        let response = self.http.get(self.url("/roles")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn list_features(&self) -> Result<Vec<SelectionOption>, ApiError> {
        let response = self.http.get(self.url("/api/features")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn search_properties(
        &self,
        filters: &PropertyFilters,
    ) -> Result<Vec<Property>, ApiError> {
        let response = self
            .http
            .get(self.url("/properties"))
            .query(&filters.to_query())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/admin/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        phone_number: &str,
        re_password: &str,
        role_id: i64,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(&RegisterRequest {
                email,
                username,
                password,
                phone_number,
                re_password,
                role_id,
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn create_property(&self, draft: &PropertyDraft) -> Result<(), ApiError> {
        let mut form = multipart::Form::new()
            .text("type", draft.property_type.clone())
            .text("status", draft.status.clone())
            .text("price", draft.price.to_string())
            .text("area", draft.area.to_string())
            .text("bedrooms", draft.bedrooms.to_string())
            .text("bathrooms", draft.bathrooms.to_string())
            .text("city", draft.city.clone())
            .text("street", draft.street.clone())
            .text("country", draft.country.clone())
            .text("description", draft.description.clone());

        for feature_id in &draft.feature_ids {
            form = form.text("features", feature_id.to_string());
        }

        for path in &draft.images {
            let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Attachment {
                path: path.display().to_string(),
                source,
            })?;
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("image")
                .to_string();
            form = form.part("images", multipart::Part::bytes(bytes).file_name(file_name));
        }

        let mut request = self.http.post(self.url("/properties")).multipart(form);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/roles"), "http://localhost:8000/roles");
    }

    #[test]
    fn test_register_request_uses_backend_field_names() {
        let request = RegisterRequest {
            email: "a@b.co",
            username: "johndoe",
            password: "abcdefgh",
            phone_number: "0888123456",
            re_password: "abcdefgh",
            role_id: 2,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["phoneNumber"], "0888123456");
        assert_eq!(json["rePassword"], "abcdefgh");
        assert_eq!(json["roleId"], 2);
    }

    #[test]
    fn test_token_can_be_set_and_dropped() {
        let mut client = ApiClient::new("http://localhost:8000");
        client.set_token(Some("token-123".into()));
        assert_eq!(client.token.as_deref(), Some("token-123"));
        client.set_token(None);
        assert!(client.token.is_none());
    }
}
