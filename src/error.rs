//! Error types for geoapi
//!
//! This module defines all error types used throughout the library.
//! Lookups on a code list never fail; errors come from explicit registration,
//! catalogue resolution, dictionary loading and factory configuration.

use std::fmt;
use thiserror::Error;

/// Result type alias using geoapi Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for geoapi operations
#[derive(Error, Debug)]
pub enum Error {
    /// Code list consistency error
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Code list dictionary parsing error
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A code of that name already exists in the code list
    #[error("duplicated code '{name}' in code list {code_list}")]
    DuplicateCode {
        /// Code list type name
        code_list: String,
        /// The offending name
        name: String,
    },

    /// Another code list is already installed under that type name
    #[error("code list {0} is already installed")]
    DuplicateCodeList(String),

    /// No code list of that type name or identifier
    #[error("unknown code list: {0}")]
    UnknownCodeList(String),

    /// Name error (blank or malformed code name)
    #[error("name error: {0}")]
    Name(String),

    /// Missing or unusable configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No factory constructor registered for the key
    #[error("no factory registered for '{0}'")]
    UnregisteredFactory(String),

    /// A factory constructor is already registered for the key
    #[error("a factory is already registered for '{0}'")]
    DuplicateFactory(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML reading or writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Code list consistency error with context
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// Code list the error was found in
    pub code_list: Option<String>,
    /// Code that failed validation
    pub code: Option<String>,
    /// Underlying reason
    pub reason: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code_list: None,
            code: None,
            reason: None,
        }
    }

    /// Set the code list where validation failed
    pub fn with_code_list(mut self, code_list: impl Into<String>) -> Self {
        self.code_list = Some(code_list.into());
        self
    }

    /// Set the offending code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref reason) = self.reason {
            write!(f, "\n\nReason: {}", reason)?;
        }

        if let Some(ref code_list) = self.code_list {
            write!(f, "\n\nCode list: {}", code_list)?;
        }

        if let Some(ref code) = self.code {
            write!(f, "\n\nCode: {}", code)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Code list dictionary parsing error
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Location in the dictionary document
    pub location: Option<String>,
    /// Source snippet that caused the error
    pub source: Option<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            source: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref loc) = self.location {
            write!(f, "\n\nLocation: {}", loc)?;
        }

        if let Some(ref src) = self.source {
            write!(f, "\n\nSource:\n{}", src)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("ordinal does not match position")
            .with_reason("expected 3, found 4")
            .with_code_list("ImagingCondition")
            .with_code("FOG");

        let msg = format!("{}", err);
        assert!(msg.contains("ordinal does not match position"));
        assert!(msg.contains("Reason:"));
        assert!(msg.contains("Code list: ImagingCondition"));
        assert!(msg.contains("Code: FOG"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("missing dictionary identifier")
            .with_location("codelists.xml:12:5")
            .with_source("<gmx:CodeListDictionary/>");

        let msg = format!("{}", err);
        assert!(msg.contains("missing dictionary identifier"));
        assert!(msg.contains("Location:"));
        assert!(msg.contains("Source:"));
    }

    #[test]
    fn test_error_conversion() {
        let val_err = ValidationError::new("test");
        let err: Error = val_err.into();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_duplicate_code_message() {
        let err = Error::DuplicateCode {
            code_list: "ProjectionKey".to_string(),
            name: "Bonne".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicated code 'Bonne' in code list ProjectionKey"
        );
    }
}
