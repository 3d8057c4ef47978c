// Binds each enrollment step to its endpoint, fields and wire types
use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

use crate::api::{
    AuthResult, AuthUserRequest, Endpoint, GeneratePasswordRequest, GenerateTwoFactorRequest,
    PasswordGenerated, TwoFactorGenerated,
};
use crate::form::{FieldSet, FieldSpec, OTP_CODE_LENGTH, OTP_CODE_PATTERN};

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const CODE_2FA: &str = "code_2fa";

pub trait Workflow: Clone + Debug + PartialEq + 'static {
    type Request: Serialize + Debug + 'static;
    type Response: DeserializeOwned + Clone + Debug + PartialEq + 'static;

    const ENDPOINT: Endpoint;
    const FIELDS: &'static [FieldSpec];

    fn request(fields: &FieldSet) -> Self::Request;

    /// Whether a resolved response should empty the form.
    fn resets_fields(response: &Self::Response) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratePassword;

impl Workflow for GeneratePassword {
    type Request = GeneratePasswordRequest;
    type Response = PasswordGenerated;

    const ENDPOINT: Endpoint = Endpoint::GeneratePassword;
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::required(USERNAME)];

    fn request(fields: &FieldSet) -> Self::Request {
        GeneratePasswordRequest {
            username: fields.get(USERNAME).to_string(),
        }
    }

    fn resets_fields(_: &Self::Response) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateTwoFactor;

impl Workflow for GenerateTwoFactor {
    type Request = GenerateTwoFactorRequest;
    type Response = TwoFactorGenerated;

    const ENDPOINT: Endpoint = Endpoint::GenerateTwoFactor;
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::required(USERNAME)];

    fn request(fields: &FieldSet) -> Self::Request {
        GenerateTwoFactorRequest {
            username: fields.get(USERNAME).to_string(),
        }
    }

    fn resets_fields(_: &Self::Response) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticate;

impl Workflow for Authenticate {
    type Request = AuthUserRequest;
    type Response = AuthResult;

    const ENDPOINT: Endpoint = Endpoint::Authenticate;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required(USERNAME),
        FieldSpec::required(PASSWORD),
        FieldSpec::required(CODE_2FA)
            .with_pattern(OTP_CODE_PATTERN)
            .with_max_length(OTP_CODE_LENGTH),
    ];

    fn request(fields: &FieldSet) -> Self::Request {
        AuthUserRequest {
            username: fields.get(USERNAME).to_string(),
            password: fields.get(PASSWORD).to_string(),
            code_2fa: fields.get(CODE_2FA).to_string(),
        }
    }

    fn resets_fields(response: &Self::Response) -> bool {
        response.is_success()
    }
}
