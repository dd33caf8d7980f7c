//! Identity provider clients.

mod cognito_client;
mod identity_provider;

pub use cognito_client::CognitoClient;
pub use identity_provider::IdentityProvider;

#[cfg(any(test, feature = "test-utils"))]
pub use identity_provider::MockIdentityProvider;
