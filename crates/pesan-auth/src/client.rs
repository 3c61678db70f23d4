//! REST client for the identity provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::AuthError;
use crate::AuthProvider;

/// The provider's answer to a successful credential exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Opaque user id issued by the provider.
    pub uid: String,
    /// The confirmed email address of the account.
    pub email: String,
}

/// Success body of `accounts:signInWithPassword`.
#[derive(Debug, Deserialize)]
struct SignInResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
}

/// Error body of a rejected sign-in.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// HTTP client for the Identity-Toolkit-style sign-in endpoint.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn sign_in_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.base_url.trim_end_matches('/'),
            self.api_key
        )
    }
}

#[async_trait]
impl AuthProvider for AuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        debug!(email = %email, "exchanging credentials with provider");

        let resp = self
            .http
            .post(self.sign_in_url())
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            let body: SignInResponse = resp.json().await?;
            return Ok(parse_success(body));
        }

        let status = resp.status();
        match resp.json::<ErrorBody>().await {
            Ok(body) => Err(AuthError::from_code(&body.error.message)),
            // Non-JSON error body; the status line is all we have.
            Err(_) => Err(AuthError::Provider(format!("HTTP {status}"))),
        }
    }
}

fn parse_success(body: SignInResponse) -> AuthUser {
    AuthUser {
        uid: body.local_id,
        email: body.email,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_parses() {
        let body: SignInResponse = serde_json::from_str(
            r#"{"localId":"x9y8z7","email":"a@b.com","idToken":"...","registered":true}"#,
        )
        .unwrap();
        let user = parse_success(body);
        assert_eq!(user.uid, "x9y8z7");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn error_body_parses_to_typed_code() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND","errors":[]}}"#,
        )
        .unwrap();
        assert!(matches!(
            AuthError::from_code(&body.error.message),
            AuthError::UserNotFound
        ));
    }

    #[test]
    fn sign_in_url_strips_trailing_slash() {
        let client = AuthClient::new("https://auth.example.com/", "k123");
        assert_eq!(
            client.sign_in_url(),
            "https://auth.example.com/v1/accounts:signInWithPassword?key=k123"
        );
    }
}
