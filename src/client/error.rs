use std::error::Error as StdError;

use crate::domain::{ErrorCode, ErrorEnvelope, KnownErrorCode, ValidationError};

/// Message used when an error envelope carries no error entries.
pub const API_ERROR_FALLBACK_MESSAGE: &str = "An error occurred with the IDT Express API";
/// Message used for 2xx responses whose body cannot be decoded.
pub const DESERIALIZE_MESSAGE: &str =
    "Failed to deserialize the response or response data is null.";
/// Message used for failures that happened before or outside a classified response.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

const UNEXPECTED_STATUS: u16 = 500;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::IdtExpressClient`].
///
/// Every failed call surfaces as exactly one of these variants:
/// - [`IdtExpressError::Api`]: non-2xx response with a vendor error envelope,
/// - [`IdtExpressError::HttpStatus`]: non-2xx response whose body is not an envelope,
/// - [`IdtExpressError::Deserialize`]: 2xx response that could not be decoded (or was empty/`null`),
/// - [`IdtExpressError::UnsupportedMethod`]: verb outside GET/POST/PUT/DELETE, no I/O performed,
/// - [`IdtExpressError::Unexpected`]: network or serialization failure, reported as status 500.
///
/// [`IdtExpressError::status`], [`IdtExpressError::message`] and
/// [`IdtExpressError::detail`] give a uniform view across variants.
pub enum IdtExpressError {
    /// IDT Express rejected the request and explained why.
    #[error("API error (HTTP {status}): {}", .envelope.first_detail().unwrap_or(API_ERROR_FALLBACK_MESSAGE))]
    Api { status: u16, envelope: ErrorEnvelope },

    /// Non-successful HTTP status code with a body that is not an error envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: String },

    /// Successful HTTP status, but the body did not decode into the expected type.
    #[error("failed to deserialize the response or response data is null: {source}")]
    Deserialize {
        body: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The caller asked for a verb the client does not issue.
    #[error("HTTP method {method} is not supported")]
    UnsupportedMethod { method: reqwest::Method },

    /// Transport or serialization failure (DNS, TLS, connection reset, etc).
    #[error("an unexpected error occurred: {detail}")]
    Unexpected {
        detail: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl IdtExpressError {
    pub(crate) fn unexpected(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        let source = source.into();
        Self::Unexpected {
            detail: source.to_string(),
            source,
        }
    }

    /// HTTP status associated with the failure.
    ///
    /// [`IdtExpressError::Unexpected`] always reports 500. Purely client-side failures
    /// return `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::HttpStatus { status, .. } => Some(*status),
            Self::Unexpected { .. } => Some(UNEXPECTED_STATUS),
            Self::Deserialize { .. }
            | Self::UnsupportedMethod { .. }
            | Self::Validation(_)
            | Self::InvalidBaseUrl(_) => None,
        }
    }

    /// Human readable summary.
    ///
    /// For vendor errors this is the detail of the first error entry.
    pub fn message(&self) -> String {
        match self {
            Self::Api { envelope, .. } => envelope
                .first_detail()
                .unwrap_or(API_ERROR_FALLBACK_MESSAGE)
                .to_owned(),
            Self::HttpStatus { status, .. } => status_text(*status),
            Self::Deserialize { .. } => DESERIALIZE_MESSAGE.to_owned(),
            Self::Unexpected { .. } => UNEXPECTED_MESSAGE.to_owned(),
            Self::UnsupportedMethod { .. } | Self::Validation(_) | Self::InvalidBaseUrl(_) => {
                self.to_string()
            }
        }
    }

    /// Detail text: the first vendor error detail, the raw response body, or the
    /// wrapped error's message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { envelope, .. } => envelope.first_detail(),
            Self::HttpStatus { body, .. } => Some(body.as_str()),
            Self::Unexpected { detail, .. } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// The vendor error envelope, when the server returned one.
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Api { envelope, .. } => Some(envelope),
            _ => None,
        }
    }

    /// Vendor error codes carried by the envelope, in response order.
    pub fn error_codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.envelope()
            .into_iter()
            .flat_map(|envelope| envelope.errors.iter().map(|error| error.code))
    }

    /// Returns `true` if any vendor error entry has the given code.
    pub fn has_error_code(&self, code: KnownErrorCode) -> bool {
        self.error_codes().any(|it| it.known() == Some(code))
    }
}

fn status_text(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status) {
        Ok(code) => code.to_string(),
        Err(_) => status.to_string(),
    }
}
