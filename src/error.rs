// certificate-pdf: error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid style preset: {0}")]
    Style(String),
    #[error("Failed to load logo: {0}")]
    Logo(String),
    #[error("Failed to create PDF: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
