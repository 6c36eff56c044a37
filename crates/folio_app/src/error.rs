//! Page error types

use folio_content::{Anchor, ContentError};
use thiserror::Error;

/// Page-level errors
#[derive(Error, Debug)]
pub enum PageError {
    /// Content failed to load or parse
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Anchor has no section on this page
    #[error("No section for anchor `{0}`")]
    UnknownAnchor(Anchor),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;
