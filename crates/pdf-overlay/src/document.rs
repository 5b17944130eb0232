//! Overlay document wrapper
//!
//! The template page is embedded once as a Form XObject; every output page
//! paints it under a 90-degree rotation and then draws overlay content in
//! un-rotated template coordinates. Operators are buffered per page and
//! flushed into content streams at save time.

use crate::ops::{grid_ops, highlight_ops, marker_ops, page_prefix_ops, text_ops};
use crate::{OverlayError, Result};
use log::debug;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

const FONT_RES: &str = "F1";
const XOBJECT_RES: &str = "Tpl";
const ALPHA_GS_RES: &str = "GSa";
const HIGHLIGHT_ALPHA: f32 = 0.35;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Highlighter yellow, the weather-mark fill
    pub fn highlighter() -> Self {
        Self::rgb(1.0, 0.9, 0.25)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// A one-template, multi-page overlay document under construction
pub struct OverlayDocument {
    /// The loaded template document; output pages are added into it
    doc: Document,
    /// Root Pages node of the document
    pages_id: ObjectId,
    /// Template page embedded as a Form XObject
    xobject_id: ObjectId,
    /// Built-in Helvetica (WinAnsi) font object
    font_id: ObjectId,
    /// Shared translucency graphics state
    alpha_gs_id: ObjectId,
    /// Template page dimensions (un-rotated)
    template_width: f64,
    template_height: f64,
    /// Buffered content operators, one buffer per output page
    page_buffers: Vec<Vec<u8>>,
}

impl OverlayDocument {
    /// Load a template PDF and prepare its first page for embedding.
    ///
    /// The template is never modified on disk; all work happens on this
    /// in-memory copy. A template without pages is a structural error.
    pub fn from_template_bytes(bytes: &[u8]) -> Result<Self> {
        let mut doc =
            Document::load_mem(bytes).map_err(|e| OverlayError::Template(e.to_string()))?;

        let pages = doc.get_pages();
        let template_page_id = *pages
            .get(&1)
            .ok_or_else(|| OverlayError::Template("template has no pages".to_string()))?;

        let (x1, y1, x2, y2) = media_box_rect(&doc, template_page_id)?;
        let template_width = x2 - x1;
        let template_height = y2 - y1;

        let content = collect_page_content(&doc, template_page_id);
        let resources_id = page_resources_id(&mut doc, template_page_id)?;

        let mut form_dict = Dictionary::new();
        form_dict.set(b"Type", Object::Name(b"XObject".to_vec()));
        form_dict.set(b"Subtype", Object::Name(b"Form".to_vec()));
        form_dict.set(b"FormType", Object::Integer(1));
        form_dict.set(
            b"BBox",
            Object::Array(vec![
                Object::Real(x1 as f32),
                Object::Real(y1 as f32),
                Object::Real(x2 as f32),
                Object::Real(y2 as f32),
            ]),
        );
        form_dict.set(b"Resources", Object::Reference(resources_id));
        let xobject_id = doc.add_object(Stream::new(form_dict, content));

        let mut font_dict = Dictionary::new();
        font_dict.set(b"Type", Object::Name(b"Font".to_vec()));
        font_dict.set(b"Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set(b"BaseFont", Object::Name(b"Helvetica".to_vec()));
        font_dict.set(b"Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        let font_id = doc.add_object(Object::Dictionary(font_dict));

        let mut gs_dict = Dictionary::new();
        gs_dict.set(b"Type", Object::Name(b"ExtGState".to_vec()));
        gs_dict.set(b"ca", Object::Real(HIGHLIGHT_ALPHA));
        gs_dict.set(b"CA", Object::Real(HIGHLIGHT_ALPHA));
        let alpha_gs_id = doc.add_object(Object::Dictionary(gs_dict));

        let pages_id = root_pages_id(&doc)?;

        debug!("template page {template_width}x{template_height}pt embedded");

        Ok(Self {
            doc,
            pages_id,
            xobject_id,
            font_id,
            alpha_gs_id,
            template_width,
            template_height,
            page_buffers: Vec::new(),
        })
    }

    /// Un-rotated template page dimensions in points
    pub fn template_size(&self) -> (f64, f64) {
        (self.template_width, self.template_height)
    }

    /// Number of output pages added so far
    pub fn page_count(&self) -> usize {
        self.page_buffers.len()
    }

    /// Add an output page: template height x width (landscape presentation
    /// of the portrait-authored template), with the template page painted
    /// under a 90-degree rotation anchored at the output page width.
    ///
    /// Returns the new page number (1-indexed). All draw calls for the page
    /// take coordinates in the template's own un-rotated space.
    pub fn add_rotated_page(&mut self) -> Result<usize> {
        self.page_buffers
            .push(page_prefix_ops(self.template_height, XOBJECT_RES));
        Ok(self.page_buffers.len())
    }

    /// Draw text at a template coordinate. Empty text is a no-op.
    pub fn draw_text(&mut self, page: usize, text: &str, x: f64, y: f64, size: f64) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let buffer = self.buffer_mut(page)?;
        buffer.extend_from_slice(&text_ops(text, x, y, size, FONT_RES));
        Ok(())
    }

    /// Draw a translucent highlight rectangle. This is deliberately a
    /// different visual affordance from the opaque "X" glyph marks.
    pub fn draw_highlight(
        &mut self,
        page: usize,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    ) -> Result<()> {
        let buffer = self.buffer_mut(page)?;
        buffer.extend_from_slice(&highlight_ops(x, y, w, h, color, ALPHA_GS_RES));
        Ok(())
    }

    /// Draw a calibration grid over the whole template page.
    ///
    /// Development aid for hand-calibrating anchor coordinates; production
    /// renders never call this.
    pub fn draw_grid(&mut self, page: usize, interval: f64) -> Result<()> {
        // Sub-5pt grids are unreadable and explode the content stream.
        let interval = interval.max(5.0);
        let (w, h) = self.template_size();
        let buffer = self.buffer_mut(page)?;
        buffer.extend_from_slice(&grid_ops(w, h, interval, FONT_RES));
        Ok(())
    }

    /// Draw a labeled crosshair at a single calibration point.
    pub fn draw_marker(&mut self, page: usize, x: f64, y: f64, label: &str) -> Result<()> {
        let buffer = self.buffer_mut(page)?;
        buffer.extend_from_slice(&marker_ops(x, y, label, FONT_RES));
        Ok(())
    }

    /// Flush all buffered pages into the document and serialize it.
    ///
    /// The template's original page is detached from the page tree; only the
    /// rotated output pages remain visible. No timestamps are written, so
    /// identical input produces identical bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if self.page_buffers.is_empty() {
            return Err(OverlayError::Save("document has no output pages".to_string()));
        }

        let mut kids = Vec::new();
        let buffers = std::mem::take(&mut self.page_buffers);
        let page_total = buffers.len();

        for mut content in buffers {
            // Balance the rotation transform opened in the page prefix
            content.extend_from_slice(b"Q\n");
            let stream_id = self.doc.add_object(Stream::new(Dictionary::new(), content));

            let mut xobjects = Dictionary::new();
            xobjects.set(XOBJECT_RES.as_bytes(), Object::Reference(self.xobject_id));
            let mut fonts = Dictionary::new();
            fonts.set(FONT_RES.as_bytes(), Object::Reference(self.font_id));
            let mut gstates = Dictionary::new();
            gstates.set(ALPHA_GS_RES.as_bytes(), Object::Reference(self.alpha_gs_id));

            let mut resources = Dictionary::new();
            resources.set(b"XObject", Object::Dictionary(xobjects));
            resources.set(b"Font", Object::Dictionary(fonts));
            resources.set(b"ExtGState", Object::Dictionary(gstates));

            let mut page_dict = Dictionary::new();
            page_dict.set(b"Type", Object::Name(b"Page".to_vec()));
            page_dict.set(b"Parent", Object::Reference(self.pages_id));
            page_dict.set(
                b"MediaBox",
                Object::Array(vec![
                    Object::Real(0.0),
                    Object::Real(0.0),
                    // Output page is template height x width
                    Object::Real(self.template_height as f32),
                    Object::Real(self.template_width as f32),
                ]),
            );
            page_dict.set(b"Resources", Object::Dictionary(resources));
            page_dict.set(b"Contents", Object::Reference(stream_id));

            let page_id = self.doc.add_object(Object::Dictionary(page_dict));
            kids.push(Object::Reference(page_id));
        }

        let pages_obj = self.doc.get_object(self.pages_id)?;
        let pages_dict = pages_obj
            .as_dict()
            .map_err(|_| OverlayError::Parse("Pages object is not a dictionary".to_string()))?;
        let mut new_pages_dict = pages_dict.clone();
        new_pages_dict.set(b"Kids", Object::Array(kids));
        new_pages_dict.set(b"Count", Object::Integer(page_total as i64));
        // An inherited MediaBox would fight the per-page boxes we just set
        new_pages_dict.remove(b"MediaBox");
        self.doc
            .objects
            .insert(self.pages_id, new_pages_dict.into());

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| OverlayError::Save(e.to_string()))?;

        debug!("serialized {page_total} overlay pages");
        Ok(buffer)
    }

    fn buffer_mut(&mut self, page: usize) -> Result<&mut Vec<u8>> {
        let count = self.page_buffers.len();
        if page == 0 || page > count {
            return Err(OverlayError::InvalidPage(page, count));
        }
        Ok(&mut self.page_buffers[page - 1])
    }
}

/// Look up a page dictionary entry, following the Parent inheritance chain.
pub(crate) fn inherited_entry(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current_id = page_id;

    // Safety limit on the parent chain
    for _ in 0..10 {
        let dict = doc.get_object(current_id).ok()?.as_dict().ok()?;

        if let Ok(entry) = dict.get(key) {
            let resolved = match entry {
                Object::Reference(ref_id) => doc.get_object(*ref_id).ok()?.clone(),
                other => other.clone(),
            };
            return Some(resolved);
        }

        match dict.get(b"Parent") {
            Ok(Object::Reference(parent_id)) => current_id = *parent_id,
            _ => break,
        }
    }

    None
}

/// Resolve a page's MediaBox (or CropBox) rectangle.
pub(crate) fn media_box_rect(doc: &Document, page_id: ObjectId) -> Result<(f64, f64, f64, f64)> {
    let media_box = inherited_entry(doc, page_id, b"MediaBox")
        .or_else(|| inherited_entry(doc, page_id, b"CropBox"))
        .ok_or_else(|| OverlayError::Parse("page has no MediaBox".to_string()))?;

    let array = media_box
        .as_array()
        .map_err(|_| OverlayError::Parse("MediaBox is not an array".to_string()))?;
    if array.len() < 4 {
        return Err(OverlayError::Parse("invalid MediaBox format".to_string()));
    }

    let mut values = [0.0f64; 4];
    for (slot, object) in values.iter_mut().zip(array.iter()) {
        *slot = object_as_f64(object)
            .ok_or_else(|| OverlayError::Parse("invalid MediaBox number".to_string()))?;
    }

    Ok((values[0], values[1], values[2], values[3]))
}

pub(crate) fn object_as_f64(object: &Object) -> Option<f64> {
    object
        .as_f32()
        .map(|v| v as f64)
        .ok()
        .or_else(|| object.as_i64().ok().map(|v| v as f64))
}

/// Concatenate (and decompress) a page's content streams.
fn collect_page_content(doc: &Document, page_id: ObjectId) -> Vec<u8> {
    let mut combined = Vec::new();

    let Ok(Ok(page_dict)) = doc.get_object(page_id).map(|o| o.as_dict()) else {
        return combined;
    };
    let Ok(contents) = page_dict.get(b"Contents") else {
        return combined;
    };

    let mut append_stream = |stream: &Stream| {
        let data = stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone());
        combined.extend_from_slice(&data);
        combined.push(b'\n');
    };

    match contents {
        Object::Stream(stream) => append_stream(stream),
        Object::Reference(ref_id) => {
            if let Ok(Object::Stream(stream)) = doc.get_object(*ref_id) {
                append_stream(stream);
            }
        }
        Object::Array(array) => {
            for entry in array {
                match entry {
                    Object::Stream(stream) => append_stream(stream),
                    Object::Reference(ref_id) => {
                        if let Ok(Object::Stream(stream)) = doc.get_object(*ref_id) {
                            append_stream(stream);
                        }
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }

    combined
}

/// The template page's Resources as an object id, materializing an inline
/// dictionary into an indirect object when needed.
fn page_resources_id(doc: &mut Document, page_id: ObjectId) -> Result<ObjectId> {
    // Direct entry first so an existing reference is reused as-is
    if let Ok(Ok(dict)) = doc.get_object(page_id).map(|o| o.as_dict()) {
        if let Ok(Object::Reference(ref_id)) = dict.get(b"Resources") {
            return Ok(*ref_id);
        }
    }

    let resources = inherited_entry(doc, page_id, b"Resources")
        .unwrap_or_else(|| Object::Dictionary(Dictionary::new()));
    let dict = resources
        .as_dict()
        .map_err(|_| OverlayError::Parse("Resources is not a dictionary".to_string()))?
        .clone();
    Ok(doc.add_object(Object::Dictionary(dict)))
}

/// Root Pages node of the document.
fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    let root = doc
        .trailer
        .get(b"Root")
        .map_err(|_| OverlayError::Parse("document trailer missing Root entry".to_string()))?;
    let catalog_id = root
        .as_reference()
        .map_err(|_| OverlayError::Parse("Root is not a reference".to_string()))?;
    let catalog = doc
        .get_object(catalog_id)?
        .as_dict()
        .map_err(|_| OverlayError::Parse("Catalog is not a dictionary".to_string()))?;
    let pages = catalog
        .get(b"Pages")
        .map_err(|_| OverlayError::Parse("Catalog missing Pages entry".to_string()))?;
    pages
        .as_reference()
        .map_err(|_| OverlayError::Parse("Pages is not a reference".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_default_is_black() {
        assert_eq!(Color::default(), Color::black());
    }

    #[test]
    fn object_as_f64_handles_both_numbers() {
        assert_eq!(object_as_f64(&Object::Integer(595)), Some(595.0));
        assert_eq!(object_as_f64(&Object::Real(841.89)), Some(841.89f32 as f64));
        assert_eq!(object_as_f64(&Object::Null), None);
    }
}
