//! Calibration and template inspection
//!
//! Development-time helpers for pinning down the coordinate map: the probe
//! renders the template with a labelled grid and an optional crosshair so
//! anchors in `layout` can be read off a printout.

use crate::Result;

pub use pdf_overlay::{page_metadata, PageInfo};

/// Render a calibration page from the template.
///
/// With `grid_interval` set, a labelled coordinate grid is drawn over the
/// whole page; `marker` places a crosshair at one template-space point,
/// labelled with its coordinates. Both optional, both may be combined.
pub fn render_calibration(
    template_bytes: &[u8],
    grid_interval: Option<f64>,
    marker: Option<(f64, f64)>,
) -> Result<Vec<u8>> {
    let mut doc = pdf_overlay::OverlayDocument::from_template_bytes(template_bytes)?;
    let page = doc.add_rotated_page()?;

    if let Some(interval) = grid_interval {
        doc.draw_grid(page, interval)?;
    }
    if let Some((x, y)) = marker {
        doc.draw_marker(page, x, y, &format!("{x},{y}"))?;
    }

    doc.finish().map_err(Into::into)
}
