//! Cognito user pool client.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cognitoidentityprovider::{
    config::Region,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::{AttributeType, AuthFlowType},
    Client,
};
use tracing::debug;

use common::{AppError, AppResult, ProviderConfig};
use domain::{
    CodeDeliveryDetails, ProviderAttribute, SessionTokens, SignUpResult, ATTR_EMAIL,
    ATTR_FAMILY_NAME, ATTR_GIVEN_NAME, AUTH_PARAM_PASSWORD, AUTH_PARAM_USERNAME,
};

use super::IdentityProvider;

/// Identity provider backed by a Cognito user pool app client.
pub struct CognitoClient {
    client: Client,
    client_id: String,
}

impl CognitoClient {
    /// Wrap an already configured SDK client.
    pub fn new(client: Client, client_id: impl Into<String>) -> Self {
        Self {
            client,
            client_id: client_id.into(),
        }
    }

    /// Build the client from provider configuration.
    ///
    /// Credentials come from the default chain (environment, profile,
    /// execution role). The region falls back to that chain when unset.
    pub async fn from_config(config: &ProviderConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        debug!(
            "Cognito client configured for region {:?}",
            sdk_config.region().map(|r| r.to_string())
        );

        Self::new(Client::new(&sdk_config), config.client_id.clone())
    }
}

#[async_trait]
impl IdentityProvider for CognitoClient {
    async fn register(
        &self,
        email: Option<String>,
        password: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<SignUpResult> {
        debug!("SignUp for {:?}", email);

        let output = self
            .client
            .sign_up()
            .client_id(&self.client_id)
            .set_username(email.clone())
            .set_password(password)
            .user_attributes(attribute(ATTR_EMAIL, email)?)
            .user_attributes(attribute(ATTR_GIVEN_NAME, first_name)?)
            .user_attributes(attribute(ATTR_FAMILY_NAME, last_name)?)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(SignUpResult {
            user_confirmed: output.user_confirmed(),
            user_sub: output.user_sub().to_string(),
            code_delivery_details: output.code_delivery_details().map(|details| {
                CodeDeliveryDetails {
                    destination: details.destination().map(str::to_string),
                    delivery_medium: details.delivery_medium().map(|m| m.as_str().to_string()),
                    attribute_name: details.attribute_name().map(str::to_string),
                }
            }),
        })
    }

    async fn confirm(&self, email: Option<String>, code: Option<String>) -> AppResult<()> {
        debug!("ConfirmSignUp for {:?}", email);

        self.client
            .confirm_sign_up()
            .client_id(&self.client_id)
            .set_username(email)
            .set_confirmation_code(code)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(())
    }

    async fn authenticate(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<SessionTokens> {
        debug!("InitiateAuth for {:?}", email);

        // Absent credentials are left out of the parameter map entirely.
        let parameters: HashMap<String, String> = [
            (AUTH_PARAM_USERNAME, email),
            (AUTH_PARAM_PASSWORD, password),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect();

        let output = self
            .client
            .initiate_auth()
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .client_id(&self.client_id)
            .set_auth_parameters(Some(parameters))
            .send()
            .await
            .map_err(provider_error)?;

        let Some(result) = output.authentication_result() else {
            debug!("InitiateAuth returned no authentication result");
            return Ok(SessionTokens::default());
        };

        Ok(SessionTokens {
            access_token: result.access_token().map(str::to_string),
            id_token: result.id_token().map(str::to_string),
            refresh_token: result.refresh_token().map(str::to_string),
            expires_in: Some(result.expires_in()),
            token_type: result.token_type().map(str::to_string),
        })
    }

    async fn fetch_profile(&self, access_token: String) -> AppResult<Vec<ProviderAttribute>> {
        let output = self
            .client
            .get_user()
            .access_token(access_token)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(output
            .user_attributes()
            .iter()
            .map(|attr| ProviderAttribute {
                name: Some(attr.name().to_string()),
                value: attr.value().map(str::to_string),
            })
            .collect())
    }

    async fn resend_code(&self, email: Option<String>) -> AppResult<()> {
        debug!("ResendConfirmationCode for {:?}", email);

        self.client
            .resend_confirmation_code()
            .client_id(&self.client_id)
            .set_username(email)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(())
    }
}

/// Build a user attribute, keeping an absent value absent.
fn attribute(name: &str, value: Option<String>) -> AppResult<AttributeType> {
    AttributeType::builder()
        .name(name)
        .set_value(value)
        .build()
        .map_err(|e| AppError::provider(None, e.to_string()))
}

/// Convert an SDK error into a provider failure.
///
/// Service errors carry the provider's code and message. Transport and
/// request construction failures have neither, so the SDK's own description
/// is used as the message.
fn provider_error<E, R>(err: SdkError<E, R>) -> AppError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };

    AppError::provider(code, message)
}
