//! certificate-pdf: render single-page landscape course certificates.
//!
//! Build a [`CertificateRequest`], optionally tweak its [`StyleOptions`], and
//! call [`generate_certificate`] to get the PDF bytes.

pub mod config;
pub mod draw;
pub mod error;
pub mod logo;
pub mod metrics;
pub mod render;
pub mod text;

pub use config::{suggested_filename, validate_required, CertificateRequest, Color, StyleOptions};
pub use draw::{fit_image, Placement};
pub use error::CertificateError;
pub use logo::{resolve_logo, LogoSource};
pub use metrics::{text_width, FontFace};
pub use render::{generate_certificate, Certificate, RenderReport};
pub use text::{fit_font_size, wrap_text};
