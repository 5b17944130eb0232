//! Sheet-overlay - gauge protocol workbook rendering
//!
//! Renders a water-gauge measurement protocol into the fixed spreadsheet
//! template: header cells at fixed addresses, a cleared-then-rewritten data
//! region holding the drawdown block, a section divider and the rebound
//! block, with row heights grown to fit wrapped remark text.
//!
//! The template workbook is read with calamine and rebuilt cell by cell
//! with rust_xlsxwriter; cell values survive the round trip, cell styling
//! does not.

mod layout;
mod payload;
mod renderer;

pub use payload::{GaugeSheet, MeasurementRow};
pub use renderer::render_gauge_sheet;

use thiserror::Error;

/// Errors that can occur while rendering a gauge sheet
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Failed to read template workbook: {0}")]
    Template(String),

    #[error("Worksheet not found: {0}")]
    WorksheetNotFound(String),

    #[error("Failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for sheet operations
pub type Result<T> = std::result::Result<T, SheetError>;
