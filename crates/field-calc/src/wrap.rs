//! Wrapped line estimation
//!
//! The estimate counts characters against a per-line budget instead of
//! measuring glyph widths. That is a deliberate approximation sized for a
//! fixed font and cell width: callers should treat the result as a monotonic
//! heuristic (longer text gives the same or more lines), not as typographic
//! truth.

/// Estimate how many visual lines `text` occupies in a fixed-width cell.
///
/// Line breaks are normalized, each explicit newline contributes at least one
/// line (even when the segment is empty), words are packed greedily up to
/// `approx_chars_per_line`, and a single word longer than the budget is
/// split across `ceil(len / budget)` synthetic lines. The total is clamped
/// to `[1, max_lines]`.
pub fn estimate_wrapped_line_count(
    text: &str,
    approx_chars_per_line: usize,
    max_lines: usize,
) -> usize {
    let budget = approx_chars_per_line.max(1);
    let max_lines = max_lines.max(1);
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut total = 0usize;
    for segment in normalized.split('\n') {
        total += segment_line_count(segment, budget);
        if total >= max_lines {
            return max_lines;
        }
    }

    total.clamp(1, max_lines)
}

/// Grown row height for a wrapped cell: the base height plus one extra line
/// height per line beyond the first.
pub fn grown_row_height(base_height: f64, extra_line_height: f64, line_count: usize) -> f64 {
    base_height + (line_count.max(1) - 1) as f64 * extra_line_height
}

fn segment_line_count(segment: &str, budget: usize) -> usize {
    let mut lines = 1usize;
    let mut current = 0usize;

    for word in segment.split_whitespace() {
        let len = word.chars().count();

        if len > budget {
            // Oversized word: flush the current line, then split the word
            // itself into budget-sized chunks.
            if current > 0 {
                lines += 1;
            }
            lines += len.div_ceil(budget) - 1;
            current = len - (len.div_ceil(budget) - 1) * budget;
        } else if current == 0 {
            current = len;
        } else if current + 1 + len <= budget {
            current += 1 + len;
        } else {
            lines += 1;
            current = len;
        }
    }

    lines
}
