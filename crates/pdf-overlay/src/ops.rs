//! Content stream operator generation

use crate::document::Color;

/// Encode text as a PDF literal string in WinAnsi encoding.
///
/// Backslash and parentheses are escaped, Latin-1 characters map to their
/// single-byte form (octal-escaped above 0x7e), the euro sign uses its
/// WinAnsi slot, and anything unmappable degrades to `?`.
pub fn encode_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' | '\r' | '\t' => out.push(' '),
            '€' => out.push_str("\\200"),
            _ => {
                let code = c as u32;
                if (0x20..0x7f).contains(&code) {
                    out.push(c);
                } else if (0xa0..=0xff).contains(&code) {
                    out.push_str(&format!("\\{:03o}", code));
                } else {
                    out.push('?');
                }
            }
        }
    }
    out.push(')');
    out
}

/// Operators opening a page: save state, rotate the template space 90
/// degrees counter-clockwise anchored at the output page width, and paint
/// the embedded template page. Every later overlay operator on the page
/// draws inside this transform, i.e. in un-rotated template coordinates.
pub fn page_prefix_ops(output_width: f64, xobject_name: &str) -> Vec<u8> {
    format!("q\n0 1 -1 0 {output_width} 0 cm\n/{xobject_name} Do\n").into_bytes()
}

/// Generate text drawing operators at a template coordinate.
pub fn text_ops(text: &str, x: f64, y: f64, size: f64, font_name: &str) -> Vec<u8> {
    let encoded = encode_pdf_string(text);
    format!("BT\n/{font_name} {size} Tf\n{x} {y} Td\n{encoded} Tj\nET\n").into_bytes()
}

/// Generate a translucent filled rectangle through the shared alpha
/// graphics state.
pub fn highlight_ops(x: f64, y: f64, w: f64, h: f64, color: Color, gs_name: &str) -> Vec<u8> {
    format!(
        "q\n/{gs_name} gs\n{} {} {} rg\n{x} {y} {w} {h} re\nf\nQ\n",
        color.r, color.g, color.b
    )
    .into_bytes()
}

/// Generate calibration grid operators covering the template page.
///
/// Thin strokes every `interval` points with coordinate labels along both
/// axes. Development aid only; never part of a production render.
pub fn grid_ops(width: f64, height: f64, interval: f64, font_name: &str) -> Vec<u8> {
    let mut ops = String::from("q\n0.55 0.55 0.85 RG\n0.25 w\n");

    let mut x = 0.0;
    while x <= width {
        ops.push_str(&format!("{x} 0 m\n{x} {height} l\nS\n"));
        x += interval;
    }
    let mut y = 0.0;
    while y <= height {
        ops.push_str(&format!("0 {y} m\n{width} {y} l\nS\n"));
        y += interval;
    }

    ops.push_str("0.25 0.25 0.6 rg\n");
    let mut x = interval;
    while x <= width {
        ops.push_str(&label_ops(&format!("{x}"), x + 1.0, 2.0, font_name));
        x += interval;
    }
    let mut y = interval;
    while y <= height {
        ops.push_str(&label_ops(&format!("{y}"), 1.0, y + 1.0, font_name));
        y += interval;
    }

    ops.push_str("Q\n");
    ops.into_bytes()
}

/// Generate a labeled crosshair marker at a single calibration point.
pub fn marker_ops(x: f64, y: f64, label: &str, font_name: &str) -> Vec<u8> {
    let mut ops = String::from("q\n0.85 0.1 0.1 RG\n0.75 w\n");
    ops.push_str(&format!("{} {y} m\n{} {y} l\nS\n", x - 6.0, x + 6.0));
    ops.push_str(&format!("{x} {} m\n{x} {} l\nS\n", y - 6.0, y + 6.0));
    ops.push_str("0.85 0.1 0.1 rg\n");
    ops.push_str(&label_ops(label, x + 7.0, y + 2.0, font_name));
    ops.push_str("Q\n");
    ops.into_bytes()
}

fn label_ops(text: &str, x: f64, y: f64, font_name: &str) -> String {
    let encoded = encode_pdf_string(text);
    format!("BT\n/{font_name} 4 Tf\n{x} {y} Td\n{encoded} Tj\nET\n")
}
