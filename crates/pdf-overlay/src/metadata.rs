//! Template page introspection
//!
//! Read-only probe over a template asset, used while hand-calibrating the
//! coordinate maps: page dimensions tell the anchor space, the rotation
//! entry tells whether the template was authored pre-rotated.

use crate::document::{inherited_entry, media_box_rect};
use crate::{OverlayError, Result};
use lopdf::{Document, Object};

/// Dimensions and rotation of a single template page
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    /// Page number (1-indexed)
    pub page: u32,
    /// Width in points
    pub width: f64,
    /// Height in points
    pub height: f64,
    /// `/Rotate` entry in degrees (0 when absent)
    pub rotation: i64,
}

/// Read dimensions and rotation for every page of a template asset.
pub fn page_metadata(bytes: &[u8]) -> Result<Vec<PageInfo>> {
    let doc = Document::load_mem(bytes).map_err(|e| OverlayError::Template(e.to_string()))?;

    let mut infos = Vec::new();
    for (page, page_id) in doc.get_pages() {
        let (x1, y1, x2, y2) = media_box_rect(&doc, page_id)?;
        let rotation = match inherited_entry(&doc, page_id, b"Rotate") {
            Some(Object::Integer(degrees)) => degrees,
            _ => 0,
        };
        infos.push(PageInfo {
            page,
            width: x2 - x1,
            height: y2 - y1,
            rotation,
        });
    }

    Ok(infos)
}
