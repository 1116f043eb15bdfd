use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// IDT Express API key, sent as the `x-api-key` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by IDT Express (`x-api-key`).
    pub const HEADER: &'static str = "x-api-key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        ensure_header_value(trimmed, Self::HEADER)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// IDT Express API secret, sent as the `x-api-secret` header.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiSecret(String);

impl ApiSecret {
    /// Header name used by IDT Express (`x-api-secret`).
    pub const HEADER: &'static str = "x-api-secret";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        ensure_header_value(&value, Self::HEADER)?;
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ISO 3166 country code, e.g. `US`.
///
/// Invariant: non-empty after trimming.
pub struct CountryIso(String);

impl CountryIso {
    /// Query parameter name used by IDT Express (`country_iso`).
    pub const FIELD: &'static str = "country_iso";

    /// Create a validated [`CountryIso`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        ensure_not_dot_segment(trimmed, Self::FIELD)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Order identifier returned by `dids/orders`.
///
/// Invariant: non-empty after trimming.
pub struct OrderId(String);

impl OrderId {
    pub const FIELD: &'static str = "order_id";

    /// Create a validated [`OrderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        ensure_not_dot_segment(trimmed, Self::FIELD)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated order id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A DID owned by the account, as addressed by `dids/numbers/{number}`.
///
/// Invariant: non-empty after trimming. The value is not normalized.
pub struct DidNumber(String);

impl DidNumber {
    pub const FIELD: &'static str = "number";

    /// Create a validated [`DidNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        ensure_not_dot_segment(trimmed, Self::FIELD)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to IDT Express.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

fn ensure_header_value(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if reqwest::header::HeaderValue::from_str(value).is_err() {
        return Err(ValidationError::InvalidHeaderValue { field });
    }
    Ok(())
}

/// `.` and `..` would be collapsed by URL normalization and address a parent resource.
fn ensure_not_dot_segment(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value == "." || value == ".." {
        return Err(ValidationError::DotSegment { field });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// IDT Express error code (`errors[].code`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by IDT Express.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known error code variant, if one exists.
    pub fn known(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Returns `true` if the request may succeed when repeated later.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if the account is not allowed to perform the request.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known IDT Express error codes.
///
/// Unknown codes are preserved as [`ErrorCode`] and return `None` from [`KnownErrorCode::from_code`].
pub enum KnownErrorCode {
    InvalidRequest,
    RequiredFieldMissing,
    InvalidField,
    ResourceNotFound,
    AccessDenied,
    QuotaExceeded,
    Throttled,
    DidsFeatureNotEnabled,
    InsufficientFunds,
    TollFreeNumberNotOffered,
    NumberNotFound,
    RegionNotOffered,
    CountryNotOffered,
    InvalidDidGroup,
}

impl KnownErrorCode {
    /// Convert a raw IDT Express integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1000 => Self::InvalidRequest,
            1001 => Self::RequiredFieldMissing,
            1002 => Self::InvalidField,
            1003 => Self::ResourceNotFound,
            2000 => Self::AccessDenied,
            2001 => Self::QuotaExceeded,
            2002 => Self::Throttled,
            3000 => Self::DidsFeatureNotEnabled,
            3001 => Self::InsufficientFunds,
            4000 => Self::TollFreeNumberNotOffered,
            4001 => Self::NumberNotFound,
            4002 => Self::RegionNotOffered,
            4003 => Self::CountryNotOffered,
            4004 => Self::InvalidDidGroup,
            _ => return None,
        })
    }

    /// The integer code used on the wire.
    pub fn code(self) -> i32 {
        match self {
            Self::InvalidRequest => 1000,
            Self::RequiredFieldMissing => 1001,
            Self::InvalidField => 1002,
            Self::ResourceNotFound => 1003,
            Self::AccessDenied => 2000,
            Self::QuotaExceeded => 2001,
            Self::Throttled => 2002,
            Self::DidsFeatureNotEnabled => 3000,
            Self::InsufficientFunds => 3001,
            Self::TollFreeNumberNotOffered => 4000,
            Self::NumberNotFound => 4001,
            Self::RegionNotOffered => 4002,
            Self::CountryNotOffered => 4003,
            Self::InvalidDidGroup => 4004,
        }
    }

    /// Whether this error is a quota or throttling limit.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::QuotaExceeded | Self::Throttled)
    }

    /// Whether this error means the account lacks access.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::AccessDenied | Self::DidsFeatureNotEnabled)
    }
}

impl From<KnownErrorCode> for ErrorCode {
    fn from(value: KnownErrorCode) -> Self {
        Self(value.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Lifecycle status of an order or order item.
pub enum OrderItemStatus {
    Created,
    Processing,
    Preview,
    Received,
    Shipped,
    Complete,
    FulfilledComplete,
    PartiallyFulfilledComplete,
    Backordered,
    BackorderCanceled,
    PartiallyFulfilledBackordered,
    PartiallyFulfilledBackorderCanceled,
    CanceledInsufficientFunds,
    CanceledInsufficientInventory,
    PartiallyFulfilledInsufficientFunds,
}

impl OrderItemStatus {
    /// Wire name of the status, as used in JSON bodies and `filter_by_status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Processing => "Processing",
            Self::Preview => "Preview",
            Self::Received => "Received",
            Self::Shipped => "Shipped",
            Self::Complete => "Complete",
            Self::FulfilledComplete => "FulfilledComplete",
            Self::PartiallyFulfilledComplete => "PartiallyFulfilledComplete",
            Self::Backordered => "Backordered",
            Self::BackorderCanceled => "BackorderCanceled",
            Self::PartiallyFulfilledBackordered => "PartiallyFulfilledBackordered",
            Self::PartiallyFulfilledBackorderCanceled => "PartiallyFulfilledBackorderCanceled",
            Self::CanceledInsufficientFunds => "CanceledInsufficientFunds",
            Self::CanceledInsufficientInventory => "CanceledInsufficientInventory",
            Self::PartiallyFulfilledInsufficientFunds => "PartiallyFulfilledInsufficientFunds",
        }
    }
}
