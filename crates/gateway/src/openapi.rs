//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::{LoginResponse, MessageResponse, SignUpResponse};
use crate::handlers::health_handler::HealthResponse;
use domain::{
    CodeDeliveryDetails, ConfirmationRequest, LoginRequest, RegistrationRequest, ResendRequest,
    SessionTokens, SignUpResult, UserProfile,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::auth_handler::signup,
        crate::handlers::auth_handler::confirm_user,
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::resend,
    ),
    components(
        schemas(
            HealthResponse,
            RegistrationRequest,
            ConfirmationRequest,
            LoginRequest,
            ResendRequest,
            SignUpResponse,
            SignUpResult,
            CodeDeliveryDetails,
            MessageResponse,
            LoginResponse,
            SessionTokens,
            UserProfile,
        )
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Authentication", description = "Signup, confirmation and login against the identity provider"),
    )
)]
pub struct ApiDoc;

/// Render the document as pretty JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/signup", "/confirm-user", "/login", "/resend"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
