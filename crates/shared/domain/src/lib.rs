//! Domain layer - Identity entities exchanged with the provider.
//!
//! Everything here is request-scoped: built from an inbound body or a
//! provider reply, serialized into the response and dropped.

pub mod constants;
pub mod identity;

pub use constants::*;
pub use identity::{
    CodeDeliveryDetails, ConfirmationRequest, LoginRequest, ProviderAttribute,
    RegistrationRequest, ResendRequest, SessionTokens, SignUpResult, UserProfile,
};
