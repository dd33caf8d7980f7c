//! Identity entities and provider result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Inbound requests
// =============================================================================
//
// Every field is optional: a missing field is forwarded as absent and
// the provider decides whether the call is acceptable.

/// Signup request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Email address, also used as the username
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "SecurePass123!"))]
    pub password: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: Option<String>,
}

/// Signup confirmation body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConfirmationRequest {
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: Option<String>,
    /// Code delivered by the provider
    #[cfg_attr(feature = "openapi", schema(example = "123456"))]
    pub code: Option<String>,
}

/// Login body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "SecurePass123!"))]
    pub password: Option<String>,
}

/// Resend confirmation code body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResendRequest {
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: Option<String>,
}

// =============================================================================
// Provider results
// =============================================================================
//
// These keep the provider's own field names on the wire so clients written
// against the provider's payloads keep working.

/// Where a confirmation code was sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct CodeDeliveryDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
}

/// Provider reply to a signup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct SignUpResult {
    /// Whether the account is already confirmed
    pub user_confirmed: bool,
    /// Provider-assigned subject identifier
    pub user_sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_delivery_details: Option<CodeDeliveryDetails>,
}

/// Tokens issued by the provider after authentication.
///
/// Every field is optional because the provider may answer an
/// authentication request without a result (for example with a challenge).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct SessionTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl SessionTokens {
    /// Access token, if the provider issued a non-empty one.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// A profile attribute exactly as the provider reports it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderAttribute {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl ProviderAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// User profile: attribute name to attribute value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct UserProfile(BTreeMap<String, String>);

impl UserProfile {
    /// Build a profile from raw provider attributes.
    ///
    /// Attributes without a name or a value (or with an empty one) are
    /// skipped. When a name repeats, the last value wins.
    pub fn from_attributes<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = ProviderAttribute>,
    {
        let map = attributes
            .into_iter()
            .filter_map(|attr| match (attr.name, attr.value) {
                (Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
                    Some((name, value))
                }
                _ => None,
            })
            .collect();

        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
