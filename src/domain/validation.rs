use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NoOrderItems,
    DotSegment { field: &'static str },
    InvalidHeaderValue { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NoOrderItems => write!(f, "an order must contain at least one order item"),
            Self::DotSegment { field } => write!(f, "{field} must not be `.` or `..`"),
            Self::InvalidHeaderValue { field } => {
                write!(f, "{field} contains characters not allowed in an HTTP header")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
