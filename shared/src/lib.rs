//! Client-side core of the COFRAP enrollment UI: wire types, response
//! decoding, field validation and the submit state machine shared by the
//! three pages.

pub mod api;
pub mod controller;
pub mod envelope;
pub mod error;
pub mod form;
pub mod workflow;

pub use api::{
    ApiConfig, AuthResult, AuthStatus, AuthUserRequest, Endpoint, GeneratePasswordRequest,
    GenerateTwoFactorRequest, PasswordGenerated, TwoFactorGenerated,
};
pub use controller::{FormController, Phase, SubmitBlocked, Transport};
pub use error::{RequestError, ValidationError};
pub use form::{FieldSet, FieldSpec};
pub use workflow::{Authenticate, GeneratePassword, GenerateTwoFactor, Workflow};
