//! Identity provider abstraction.
//!
//! Handlers only talk to this trait, so the router can be driven against a
//! real provider or a stub without caring which.

use async_trait::async_trait;

use common::AppResult;
use domain::{ProviderAttribute, SessionTokens, SignUpResult};

/// Operations the gateway needs from the identity provider.
///
/// Each method is a single call with no retry. A failure carries the
/// provider's message.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account for `email` with the given name attributes.
    async fn register(
        &self,
        email: Option<String>,
        password: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<SignUpResult>;

    /// Confirm a pending signup with the delivered code.
    async fn confirm(&self, email: Option<String>, code: Option<String>) -> AppResult<()>;

    /// Authenticate with username and password.
    async fn authenticate(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<SessionTokens>;

    /// Fetch the raw profile attributes behind an access token.
    async fn fetch_profile(&self, access_token: String) -> AppResult<Vec<ProviderAttribute>>;

    /// Send the confirmation code again.
    async fn resend_code(&self, email: Option<String>) -> AppResult<()>;
}
