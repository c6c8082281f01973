//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::HttpConfig;
use crate::error_handling::InitializationError;

/// Builds the shared catalog client.
///
/// One client serves both page fetches and GraphQL calls, so connections are
/// pooled across the whole run. Redirects follow reqwest's default policy.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_client(config: &HttpConfig) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_agent() {
        let config = HttpConfig {
            timeout_seconds: 1,
            user_agent: "offer_report-test/0.1".into(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
