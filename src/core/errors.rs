use std::fmt;

/// Which signup/content rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    MissingFields,
    PasswordMismatch,
    EmailTaken,
    UsernameTaken,
    EmptyContent,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingFields => write!(f, "All fields are required"),
            ValidationFailure::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationFailure::EmailTaken => write!(f, "Email already exists"),
            ValidationFailure::UsernameTaken => write!(f, "Username already taken"),
            ValidationFailure::EmptyContent => write!(f, "Content is required"),
        }
    }
}

#[derive(Debug)]
pub enum FeedError {
    Validation(ValidationFailure),
    InvalidCredentials,
    ContentRejected,
    Unauthenticated,
    Storage(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Validation(failure) => write!(f, "{}", failure),
            FeedError::InvalidCredentials => write!(f, "Invalid email or password"),
            FeedError::ContentRejected => write!(f, "Content contains banned words"),
            FeedError::Unauthenticated => write!(f, "Not logged in"),
            FeedError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

impl From<ValidationFailure> for FeedError {
    fn from(failure: ValidationFailure) -> Self {
        FeedError::Validation(failure)
    }
}

// Backend and serialization faults surface as storage errors
impl From<anyhow::Error> for FeedError {
    fn from(err: anyhow::Error) -> Self {
        FeedError::Storage(err.to_string())
    }
}
