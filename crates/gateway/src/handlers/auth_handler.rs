//! Authentication handlers.
//!
//! Each handler forwards one intent to the identity provider and shapes the
//! reply. Provider failures become `400 {"error": ...}` through [`AppError`].

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use common::{AppError, AppResult};
use domain::{
    ConfirmationRequest, LoginRequest, RegistrationRequest, ResendRequest, SessionTokens,
    SignUpResult, UserProfile, CODE_RESENT_MESSAGE, CONFIRMED_MESSAGE, LOGGED_IN_MESSAGE,
    MISSING_ACCESS_TOKEN_MESSAGE, SIGNED_UP_MESSAGE,
};

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Signup response
#[derive(Debug, Serialize, ToSchema)]
pub struct SignUpResponse {
    #[schema(example = "User signed up")]
    pub message: &'static str,
    /// Provider reply, unchanged
    pub response: SignUpResult,
}

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: &'static str,
    pub tokens: SessionTokens,
    pub user: UserProfile,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/confirm-user", post(confirm_user))
        .route("/login", post(login))
        .route("/resend", post(resend))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Authentication",
    request_body = RegistrationRequest,
    responses(
        (status = 200, description = "User signed up", body = SignUpResponse),
        (status = 400, description = "Provider rejected the signup")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegistrationRequest>,
) -> AppResult<Json<SignUpResponse>> {
    let response = state
        .provider
        .register(
            payload.email,
            payload.password,
            payload.first_name,
            payload.last_name,
        )
        .await
        .map_err(|e| failed("Signup", e))?;

    Ok(Json(SignUpResponse {
        message: SIGNED_UP_MESSAGE,
        response,
    }))
}

/// Confirm a signup with the delivered code
#[utoipa::path(
    post,
    path = "/confirm-user",
    tag = "Authentication",
    request_body = ConfirmationRequest,
    responses(
        (status = 200, description = "User confirmed", body = MessageResponse),
        (status = 400, description = "Provider rejected the code")
    )
)]
pub async fn confirm_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ConfirmationRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .provider
        .confirm(payload.email, payload.code)
        .await
        .map_err(|e| failed("Confirmation", e))?;

    Ok(Json(MessageResponse {
        message: CONFIRMED_MESSAGE,
    }))
}

/// Authenticate and return the provider's tokens with the user's profile
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Authentication or profile lookup failed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let tokens = state
        .provider
        .authenticate(payload.email, payload.password)
        .await
        .map_err(|e| failed("Login", e))?;

    let access_token = tokens
        .access_token()
        .map(str::to_string)
        .ok_or_else(|| failed("Login", AppError::bad_request(MISSING_ACCESS_TOKEN_MESSAGE)))?;

    let attributes = state
        .provider
        .fetch_profile(access_token)
        .await
        .map_err(|e| failed("Profile lookup", e))?;

    Ok(Json(LoginResponse {
        message: LOGGED_IN_MESSAGE,
        tokens,
        user: UserProfile::from_attributes(attributes),
    }))
}

/// Send the confirmation code again
#[utoipa::path(
    post,
    path = "/resend",
    tag = "Authentication",
    request_body = ResendRequest,
    responses(
        (status = 200, description = "Code resent", body = MessageResponse),
        (status = 400, description = "Provider refused to resend")
    )
)]
pub async fn resend(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ResendRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .provider
        .resend_code(payload.email)
        .await
        .map_err(|e| failed("Resend", e))?;

    Ok(Json(MessageResponse {
        message: CODE_RESENT_MESSAGE,
    }))
}

/// Log a handler failure and pass it on unchanged.
fn failed(action: &str, err: AppError) -> AppError {
    error!(code = err.code(), "{} error: {}", action, err);
    err
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clients::MockIdentityProvider;
    use domain::ProviderAttribute;

    fn state(provider: MockIdentityProvider) -> AppState {
        AppState::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_signup_forwards_name_attributes() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_register()
            .withf(|email, password, first, last| {
                email.as_deref() == Some("a@b.com")
                    && password.as_deref() == Some("pw")
                    && first.as_deref() == Some("Jane")
                    && last.as_deref() == Some("Doe")
            })
            .times(1)
            .returning(|_, _, _, _| {
                Ok(SignUpResult {
                    user_confirmed: false,
                    user_sub: "sub-1".to_string(),
                    code_delivery_details: None,
                })
            });

        let payload = RegistrationRequest {
            email: Some("a@b.com".to_string()),
            password: Some("pw".to_string()),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
        };

        let Json(body) = signup(State(state(provider)), JsonBody(payload))
            .await
            .unwrap();

        assert_eq!(body.message, SIGNED_UP_MESSAGE);
        assert_eq!(body.response.user_sub, "sub-1");
    }

    #[tokio::test]
    async fn test_login_without_access_token_skips_profile() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_authenticate()
            .times(1)
            .returning(|_, _| Ok(SessionTokens::default()));
        provider.expect_fetch_profile().never();

        let result = login(State(state(provider)), JsonBody(LoginRequest::default())).await;

        match result {
            Err(AppError::BadRequest(message)) => {
                assert_eq!(message, MISSING_ACCESS_TOKEN_MESSAGE)
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_login_uses_access_token_for_profile() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_authenticate().returning(|_, _| {
            Ok(SessionTokens {
                access_token: Some("access-123".to_string()),
                ..Default::default()
            })
        });
        provider
            .expect_fetch_profile()
            .withf(|token| token == "access-123")
            .times(1)
            .returning(|_| Ok(vec![ProviderAttribute::new("email", "a@b.com")]));

        let Json(body) = login(State(state(provider)), JsonBody(LoginRequest::default()))
            .await
            .unwrap();

        assert_eq!(body.message, LOGGED_IN_MESSAGE);
        assert_eq!(body.user.get("email"), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_profile_failure_fails_login() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_authenticate().returning(|_, _| {
            Ok(SessionTokens {
                access_token: Some("access-123".to_string()),
                ..Default::default()
            })
        });
        provider
            .expect_fetch_profile()
            .returning(|_| Err(AppError::provider(None, "Access Token has been revoked")));

        let result = login(State(state(provider)), JsonBody(LoginRequest::default())).await;
        assert!(matches!(result, Err(AppError::Provider { .. })));
    }

    #[tokio::test]
    async fn test_resend_passes_email() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resend_code()
            .withf(|email| email.as_deref() == Some("a@b.com"))
            .times(1)
            .returning(|_| Ok(()));

        let payload = ResendRequest {
            email: Some("a@b.com".to_string()),
        };
        let Json(body) = resend(State(state(provider)), JsonBody(payload))
            .await
            .unwrap();

        assert_eq!(body.message, CODE_RESENT_MESSAGE);
    }
}
