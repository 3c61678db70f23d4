//! # pesan-auth
//!
//! Credential exchange against the external identity provider.
//!
//! [`AuthClient`] talks to an Identity-Toolkit-style REST endpoint
//! (`accounts:signInWithPassword`). The [`AuthProvider`] trait is the seam
//! the login controller depends on, so tests can substitute a mock that
//! never touches the network.

pub mod client;

mod error;

use async_trait::async_trait;

pub use client::{AuthClient, AuthUser};
pub use error::AuthError;

/// Anything that can exchange an email/password pair for a provider user.
#[async_trait]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;
}
