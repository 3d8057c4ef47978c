// Wire types and endpoint configuration for the enrollment functions
use serde::{Deserialize, Serialize};

/// Development builds go through the dev-server proxy.
pub const DEV_API_BASE_URL: &str = "/function";
pub const PROD_API_BASE_URL: &str = "https://openfaas.91.99.16.71.nip.io/function";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;
/// Browsers take `setTimeout` delays as signed 32-bit.
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

// ============================================
// ENDPOINTS
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GeneratePassword,
    GenerateTwoFactor,
    Authenticate,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GeneratePassword => "generate-password",
            Endpoint::GenerateTwoFactor => "generate-2fa",
            Endpoint::Authenticate => "auth-user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Zero disables the client-side timeout.
    pub timeout_ms: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: timeout_ms.min(MAX_TIMEOUT_MS),
        }
    }

    /// Resolve from optional overrides; `debug` picks the dev proxy prefix
    /// when no base URL override is given.
    pub fn resolve(base_url: Option<&str>, timeout_ms: Option<&str>, debug: bool) -> Self {
        let base_url = match base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => url.to_string(),
            None if debug => DEV_API_BASE_URL.to_string(),
            None => PROD_API_BASE_URL.to_string(),
        };
        let timeout_ms = timeout_ms
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS)
            .min(MAX_TIMEOUT_MS);

        Self { base_url, timeout_ms }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    pub fn timeout(&self) -> Option<u32> {
        (self.timeout_ms > 0).then_some(self.timeout_ms)
    }
}

// ============================================
// REQUESTS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratePasswordRequest {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateTwoFactorRequest {
    pub username: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct AuthUserRequest {
    pub username: String,
    pub password: String,
    pub code_2fa: String,
}

impl std::fmt::Debug for AuthUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthUserRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("code_2fa", &"<redacted>")
            .finish()
    }
}

// ============================================
// RESPONSES
// ============================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PasswordGenerated {
    pub message: String,
    pub username: String,
    /// Base64 PNG holding the cleartext password.
    pub qr_code_base64: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TwoFactorGenerated {
    pub message: String,
    pub username: String,
    pub qr_code_2fa_base64: String,
    pub manual_entry_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum AuthStatus {
    Success,
    Other(String),
    #[default]
    Missing,
}

impl From<Option<String>> for AuthStatus {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) if s == "success" => AuthStatus::Success,
            Some(s) => AuthStatus::Other(s),
            None => AuthStatus::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResult {
    #[serde(default)]
    pub status: AuthStatus,
    #[serde(default)]
    pub message: String,
    pub username: Option<String>,
    pub token: Option<String>,
}

impl AuthResult {
    pub fn is_success(&self) -> bool {
        self.status == AuthStatus::Success
    }
}

/// Builds the `src` for an embedded PNG, or `None` when there is nothing to show.
pub fn png_data_uri(base64: &str) -> Option<String> {
    (!base64.is_empty()).then(|| format!("data:image/png;base64,{}", base64))
}
