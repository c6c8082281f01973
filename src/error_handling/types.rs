//! Error type definitions.
//!
//! This module defines the error enums returned by the catalog collaborators
//! and the error, warning, and info categories tracked in run statistics.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while talking to the catalog or interpreting what it returned.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An embedded payload marker is missing from a fetched page.
    #[error("payload marker '{marker}' not found{}", after_start_suffix(.after_start))]
    MarkerNotFound {
        /// The marker that could not be located
        marker: String,
        /// Whether the search started after the start marker
        after_start: bool,
    },

    /// A discovered locale hint has no entry in the locale table.
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    /// The request itself failed (connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Response status code
        status: reqwest::StatusCode,
    },

    /// The extracted payload or response body is not the expected JSON.
    #[error("failed to decode payload: {0}")]
    PayloadDecode(#[from] serde_json::Error),

    /// The GraphQL endpoint reported errors.
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// The requested address cannot be turned into a site path.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress {
        /// Address as supplied
        address: String,
        /// Why it was rejected
        reason: String,
    },

    /// A provider URL does not have the `<country>/<kind>/<slug>` shape.
    #[error("invalid provider URL format: {0}")]
    InvalidProviderUrl(String),
}

fn after_start_suffix(after_start: &bool) -> &'static str {
    if *after_start {
        " after start marker"
    } else {
        ""
    }
}

impl CatalogError {
    /// Wraps a client error together with the URL it concerned.
    pub fn transport(url: impl Into<String>, source: ReqwestError) -> Self {
        CatalogError::Transport {
            url: url.into(),
            source,
        }
    }

    /// Statistics category for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            CatalogError::MarkerNotFound { .. } => ErrorType::MarkerNotFound,
            CatalogError::UnknownLocale(_) => ErrorType::UnknownLocale,
            CatalogError::Transport { source, .. } => {
                super::categorization::categorize_reqwest_error(source)
            }
            CatalogError::HttpStatus { status, .. } => {
                super::categorization::categorize_status(*status)
            }
            CatalogError::PayloadDecode(_) => ErrorType::PayloadDecodeError,
            CatalogError::Graphql(_) => ErrorType::GraphqlError,
            CatalogError::InvalidAddress { .. } => ErrorType::InvalidAddress,
            CatalogError::InvalidProviderUrl(_) => ErrorType::InvalidProviderUrl,
        }
    }
}

/// Types of errors that can occur while collecting offers or providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    /// Request could not be built
    HttpRequestBuilderError,
    /// Redirect loop or limit exceeded
    HttpRequestRedirectError,
    /// Request timed out
    HttpRequestTimeoutError,
    /// Connection failed
    HttpRequestConnectError,
    /// Response body could not be read
    HttpRequestBodyError,
    /// Response body could not be decoded
    HttpRequestDecodeError,
    /// Any other client failure or unexpected status
    HttpRequestOtherError,
    /// 429 Too Many Requests
    HttpRequestTooManyRequests,
    /// 403 Forbidden, typically bot detection
    HttpRequestBotDetectionError,
    /// 404 Not Found
    HttpRequestNotFound,
    /// 5xx
    HttpRequestServerError,
    // Payload errors
    /// Page without the embedded state blob
    MarkerNotFound,
    /// State blob or response is not the expected JSON
    PayloadDecodeError,
    /// GraphQL endpoint returned errors
    GraphqlError,
    // Input errors
    /// Locale hint outside the locale table
    UnknownLocale,
    /// Title address cannot be resolved
    InvalidAddress,
    /// Provider URL with the wrong shape
    InvalidProviderUrl,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::MarkerNotFound => "Payload marker not found",
            ErrorType::PayloadDecodeError => "Payload decode error",
            ErrorType::GraphqlError => "GraphQL error",
            ErrorType::UnknownLocale => "Unknown locale",
            ErrorType::InvalidAddress => "Invalid address",
            ErrorType::InvalidProviderUrl => "Invalid provider URL",
        }
    }
}

/// Types of warnings that can occur during a run.
///
/// Warnings never stop processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Offer URL grouped under its raw string
    UnparsableOfferUrl,
    /// A locale returned no offers
    EmptyOfferList,
}

impl WarningType {
    /// Human-readable label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::UnparsableOfferUrl => "Unparsable offer URL",
            WarningType::EmptyOfferList => "Locale without offers",
        }
    }
}

/// Types of informational metrics collected during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Removed by deduplication
    DuplicateOffer,
    /// Dropped by the monetization filter
    FilteredOffer,
    /// Country listed without a fetch
    SingleProviderShortcut,
}

impl InfoType {
    /// Human-readable label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DuplicateOffer => "Duplicate offers removed",
            InfoType::FilteredOffer => "Offers filtered out",
            InfoType::SingleProviderShortcut => "Countries listed without fetch",
        }
    }
}
