/// Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OoxmlError {
    /// A caller-supplied value is out of range (scale factor, coordinate)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A freeform was converted before any drawing operation was added
    #[error("Freeform path has no drawing operations")]
    EmptyPath,

    /// XML parsing or writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Well-formed XML that is not the expected shape markup
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
