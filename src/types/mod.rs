use thiserror::Error;

mod domain_types;
mod uids;

pub use domain_types::*;
pub use uids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid document UID: {reason}")]
    InvalidUid { reason: String },

    #[error("Invalid document type: {name} - {reason}")]
    InvalidDocumentType { name: String, reason: String },

    #[error("Invalid API endpoint: {url} - {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid access token: {reason}")]
    InvalidAccessToken { reason: String },

    #[error("Invalid template name: {name} - {reason}")]
    InvalidTemplateName { name: String, reason: String },

    #[error("Page size out of bounds: {value}, expected {min}..={max}")]
    PageSizeOutOfBounds { value: u32, min: u32, max: u32 },
}
