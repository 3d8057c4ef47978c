// Build-time API configuration
use cofrap_shared::ApiConfig;

/// Resolved from `COFRAP_API_BASE_URL` and `COFRAP_REQUEST_TIMEOUT_MS` at
/// compile time; debug builds default to the dev proxy prefix.
pub fn api_config() -> ApiConfig {
    ApiConfig::resolve(
        option_env!("COFRAP_API_BASE_URL"),
        option_env!("COFRAP_REQUEST_TIMEOUT_MS"),
        cfg!(debug_assertions),
    )
}
