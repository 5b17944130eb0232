//! Report - daily report page overlay rendering
//!
//! This crate turns a structured daily construction report into overlay
//! pages on the fixed report template:
//! - serde record types for the report payload
//! - the enumerated coordinate map (all geometry is data, never inline)
//! - row cursor pagination with marker-row support
//! - the page renderer, including the weekend-duty continuation page
//! - the coordinate-calibration probe used during development
//!
//! # Example
//!
//! ```ignore
//! use report::{parse_report, render_daily_report};
//!
//! let record = parse_report(&json)?;
//! let pdf_bytes = render_daily_report(&record, &template_bytes)?;
//! ```

pub mod layout;
pub mod pagination;
mod probe;
mod record;
mod renderer;

pub use probe::{page_metadata, render_calibration, PageInfo};
pub use record::{
    parse_report, DailyReport, DrillingRow, DutyRow, TimeRange, TransportLeg, WorkerRow,
};
pub use renderer::render_daily_report;

use thiserror::Error;

/// Errors that can occur while rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to parse report payload: {0}")]
    Parse(String),

    #[error("Overlay error: {0}")]
    Overlay(#[from] pdf_overlay::OverlayError),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
