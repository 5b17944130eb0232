//! PDF Overlay - Low-level template overlay
//!
//! This crate provides functionality for:
//! - Opening an immutable template PDF and embedding its page as a Form XObject
//! - Creating rotated landscape output pages from a portrait-authored template
//! - Drawing text, marks and translucent highlights at template coordinates
//! - Reading template page metadata (dimensions, rotation)
//! - Calibration artifacts (coordinate grid, labeled point marker)
//!
//! # Example
//!
//! ```ignore
//! use pdf_overlay::OverlayDocument;
//!
//! let mut doc = OverlayDocument::from_template_bytes(&template)?;
//! let page = doc.add_rotated_page()?;
//! doc.draw_text(page, "Mustermann", page_x, page_y, 9.0)?;
//! let bytes = doc.finish()?;
//! ```

mod document;
mod metadata;
mod ops;

pub use document::{Color, OverlayDocument};
pub use metadata::{page_metadata, PageInfo};
pub use ops::encode_pdf_string;

use thiserror::Error;

/// Errors that can occur during overlay operations
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Failed to load template: {0}")]
    Template(String),

    #[error("Failed to save document: {0}")]
    Save(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("PDF parsing error: {0}")]
    Parse(String),

    #[error("Lopdf error: {0}")]
    Lopdf(#[from] lopdf::Error),
}

/// Result type for overlay operations
pub type Result<T> = std::result::Result<T, OverlayError>;
