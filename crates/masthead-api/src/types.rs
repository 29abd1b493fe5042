//! API request and response types
//!
//! The API surface is transport-agnostic: an HTTP frontend translates
//! incoming requests into [`ApiRequest`] values (resolving the bearer
//! token to the acting profile id along the way) and writes the
//! [`ApiResponse`] status and body back out. Nothing in this crate
//! touches sockets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Get string representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API request.
///
/// The acting profile is an explicit field, not ambient state: the
/// authentication frontend resolves credentials to a profile id before
/// dispatch, and handlers that require authentication call
/// [`ApiRequest::require_actor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,

    /// Request path (e.g. `/api/organizations/acme`)
    pub path: String,

    /// Acting profile id, if the caller is authenticated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Uuid>,

    /// JSON request body (`null` when absent)
    #[serde(default)]
    pub body: serde_json::Value,
}

impl ApiRequest {
    /// Create a new request with no actor and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            actor: None,
            body: serde_json::Value::Null,
        }
    }

    /// Set the acting profile.
    pub fn with_actor(mut self, actor: Uuid) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = body;
        self
    }

    /// The acting profile, or [`ApiError::AuthRequired`].
    pub fn require_actor(&self) -> ApiResult<Uuid> {
        self.actor.ok_or(ApiError::AuthRequired)
    }

    /// Deserialize the body into a typed payload.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidRequest`] if the body does not match
    pub fn parse_body<T: serde::de::DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }
}

/// An API response: an HTTP status plus a JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,

    /// JSON response body (`null` for empty-body responses)
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Create a success response.
    pub fn ok(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Create an empty-body 200 response (delete-style endpoints).
    pub fn no_content() -> Self {
        Self {
            status: 200,
            body: serde_json::Value::Null,
        }
    }

    /// Create an error response.
    pub fn from_error(error: &ApiError) -> Self {
        Self {
            status: error.status_code(),
            body: serde_json::json!({
                "error": {
                    "code": error.error_code(),
                    "message": error.to_string(),
                }
            }),
        }
    }

    /// Whether the status is a success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The error code, for error responses.
    pub fn error_code(&self) -> Option<&str> {
        self.body["error"]["code"].as_str()
    }
}

/// Server identity, reported for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,

    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let actor = Uuid::now_v7();
        let request = ApiRequest::new(Method::Post, "/api/organizations")
            .with_actor(actor)
            .with_body(serde_json::json!({"name": "Acme Press"}));

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.require_actor().unwrap(), actor);
        assert_eq!(request.body["name"], "Acme Press");
    }

    #[test]
    fn test_require_actor_without_auth() {
        let request = ApiRequest::new(Method::Post, "/api/organizations");

        let err = request.require_actor().unwrap_err();
        assert_eq!(err.error_code(), "AUTH_REQUIRED");
    }

    #[test]
    fn test_parse_body_rejects_mismatch() {
        #[derive(serde::Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            name: String,
        }

        let request = ApiRequest::new(Method::Post, "/x").with_body(serde_json::json!({"nope": 1}));
        assert!(request.parse_body::<Payload>().is_err());
    }

    #[test]
    fn test_error_response_shape() {
        let response = ApiResponse::from_error(&ApiError::NotFound("organization acme".into()));

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        assert_eq!(response.error_code(), Some("NOT_FOUND"));
    }

    #[test]
    fn test_no_content() {
        let response = ApiResponse::no_content();
        assert_eq!(response.status, 200);
        assert!(response.body.is_null());
        assert!(response.is_success());
    }
}
