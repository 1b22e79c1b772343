// certificate-pdf: logo sources and fallback chain

use crate::error::CertificateError;
use ::image::DynamicImage;
use std::io::Read;
use std::path::PathBuf;

/// One place a logo may come from.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoSource {
    /// Raw PNG/JPEG bytes handed over by the caller (an upload).
    Bytes(Vec<u8>),
    /// A file on local storage.
    File(PathBuf),
    /// An image fetched over HTTP(S).
    Url(String),
}

impl LogoSource {
    /// Interpret a user-supplied location: `http(s)://` is a URL, anything
    /// else a local path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            LogoSource::Url(location.to_string())
        } else {
            LogoSource::File(PathBuf::from(location))
        }
    }

    /// Missing files are skipped quietly.
    fn is_absent_file(&self) -> bool {
        matches!(self, LogoSource::File(p) if !p.exists())
    }

    fn describe(&self) -> String {
        match self {
            LogoSource::Bytes(b) => format!("uploaded image ({} bytes)", b.len()),
            LogoSource::File(p) => p.display().to_string(),
            LogoSource::Url(u) => u.clone(),
        }
    }

    fn read_bytes(&self) -> Result<Vec<u8>, CertificateError> {
        match self {
            LogoSource::Bytes(bytes) => Ok(bytes.clone()),
            LogoSource::File(path) => std::fs::read(path)
                .map_err(|e| CertificateError::Logo(format!("{}: {}", path.display(), e))),
            LogoSource::Url(url) => {
                let response = ureq::get(url)
                    .call()
                    .map_err(|e| CertificateError::Logo(format!("Failed to fetch URL: {}", e)))?;

                let mut bytes = Vec::new();
                response
                    .into_reader()
                    .read_to_end(&mut bytes)
                    .map_err(|e| CertificateError::Logo(format!("Failed to read response: {}", e)))?;
                Ok(bytes)
            }
        }
    }

    /// Read and decode this source.
    pub fn load(&self) -> Result<DynamicImage, CertificateError> {
        let bytes = self.read_bytes()?;
        ::image::load_from_memory(&bytes)
            .map_err(|e| CertificateError::Logo(format!("Failed to decode image: {}", e)))
    }
}

/// Try each source in order and return the first image that decodes.
///
/// Failures are logged and skipped; `None` means no logo is drawn.
pub fn resolve_logo(sources: &[LogoSource]) -> Option<DynamicImage> {
    for source in sources {
        if source.is_absent_file() {
            log::debug!("Logo file {} not present, skipping", source.describe());
            continue;
        }
        match source.load() {
            Ok(img) => {
                log::debug!(
                    "Using logo from {} ({}x{} px)",
                    source.describe(),
                    img.width(),
                    img.height()
                );
                return Some(img);
            }
            Err(e) => log::warn!("Could not place logo from {}: {}", source.describe(), e),
        }
    }
    None
}
