// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Raised by the extractor only; the renderer falls back to German.
    #[error("Unsupported language: {}", .0.as_deref().unwrap_or("none"))]
    UnsupportedLanguage(Option<String>),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Image decode failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("Invalid CSS selector `{0}`")]
    Selector(String),

    #[error("Cannot use folder {}: {source}", path.display())]
    Folder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
