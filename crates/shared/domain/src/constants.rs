//! Domain-level constants.
//!
//! Response messages and the attribute names the identity provider expects.

// =============================================================================
// Response Messages
// =============================================================================

/// Body of the health check `success` field
pub const HEALTHY_MESSAGE: &str = "Server is healthy!!!";

/// Successful signup
pub const SIGNED_UP_MESSAGE: &str = "User signed up";

/// Successful confirmation
pub const CONFIRMED_MESSAGE: &str = "User confirmed successfully";

/// Successful login
pub const LOGGED_IN_MESSAGE: &str = "Login successful";

/// Confirmation code sent again
pub const CODE_RESENT_MESSAGE: &str = "Confirmation code resent successfully";

/// Authentication succeeded but the provider returned no access token
pub const MISSING_ACCESS_TOKEN_MESSAGE: &str = "Login failed: missing access token";

// =============================================================================
// Provider Attributes
// =============================================================================

/// Standard attribute holding the user's email address
pub const ATTR_EMAIL: &str = "email";

/// Standard attribute holding the user's first name
pub const ATTR_GIVEN_NAME: &str = "given_name";

/// Standard attribute holding the user's last name
pub const ATTR_FAMILY_NAME: &str = "family_name";

// =============================================================================
// Authentication
// =============================================================================

/// Auth parameter key for the username
pub const AUTH_PARAM_USERNAME: &str = "USERNAME";

/// Auth parameter key for the password
pub const AUTH_PARAM_PASSWORD: &str = "PASSWORD";
