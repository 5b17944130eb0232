//! Daily report page rendering
//!
//! Best-effort per field: an absent or malformed value renders as a blank,
//! never as an error or a "null" literal. The render as a whole only fails
//! on structural problems (template unreadable).

use crate::layout::{
    self, scalar_anchor, weather_anchor, Anchor, ScalarField, DRILLING_FLAG_COLUMNS,
    DRILLING_REGION, TIME_STRIP, WEEKDAY_ANCHORS, WORKERS,
};
use crate::pagination::RowCursor;
use crate::record::{text, DailyReport, DutyRow, TimeRange};
use crate::Result;
use field_calc::{duration_hours, resolve_flag_value, weekday_index};
use log::{debug, warn};
use pdf_overlay::{Color, OverlayDocument};

/// Render a daily report onto the fixed report template.
///
/// Produces one landscape page; a second continuation page is appended when
/// the record carries active weekend-duty entries. Returns the finished
/// document bytes.
pub fn render_daily_report(report: &DailyReport, template_bytes: &[u8]) -> Result<Vec<u8>> {
    let mut doc = OverlayDocument::from_template_bytes(template_bytes)?;
    let page = doc.add_rotated_page()?;

    draw_scalars(&mut doc, page, report)?;
    draw_weekday_mark(&mut doc, page, report)?;
    draw_weather_marks(&mut doc, page, report)?;
    draw_time_strip(&mut doc, page, report)?;
    draw_drilling_region(&mut doc, page, report)?;
    draw_workers(&mut doc, page, report)?;
    draw_duty_continuation(&mut doc, report)?;

    debug!(
        "rendered daily report {} across {} pages",
        text(&report.report_no),
        doc.page_count()
    );
    doc.finish().map_err(Into::into)
}

fn draw_at(doc: &mut OverlayDocument, page: usize, value: &str, anchor: Anchor) -> Result<()> {
    let size = anchor.font_size.unwrap_or(layout::DEFAULT_FONT_SIZE);
    doc.draw_text(page, value, anchor.x, anchor.y, size)?;
    Ok(())
}

fn draw_scalars(doc: &mut OverlayDocument, page: usize, report: &DailyReport) -> Result<()> {
    let fields = [
        (ScalarField::Date, text(&report.date)),
        (ScalarField::ReportNo, text(&report.report_no)),
        (ScalarField::Project, text(&report.project)),
        (ScalarField::Site, text(&report.site)),
        (ScalarField::Contractor, text(&report.contractor)),
        (ScalarField::Rig, text(&report.rig)),
        (ScalarField::Temperature, text(&report.temperature)),
    ];

    for (field, value) in fields {
        draw_at(doc, page, value, scalar_anchor(field))?;
    }
    Ok(())
}

/// An unparseable date draws no mark; the rest of the page is unaffected.
fn draw_weekday_mark(doc: &mut OverlayDocument, page: usize, report: &DailyReport) -> Result<()> {
    if let Some(index) = weekday_index(text(&report.date)) {
        draw_at(doc, page, "X", WEEKDAY_ANCHORS[index as usize])?;
    }
    Ok(())
}

/// Weather marks are translucent highlights over the pre-printed labels,
/// deliberately distinct from the opaque "X" checkbox glyphs.
fn draw_weather_marks(doc: &mut OverlayDocument, page: usize, report: &DailyReport) -> Result<()> {
    for key in &report.weather {
        if let Some(anchor) = weather_anchor(key) {
            doc.draw_highlight(
                page,
                anchor.x,
                anchor.y,
                layout::WEATHER_MARK_WIDTH,
                layout::WEATHER_MARK_HEIGHT,
                Color::highlighter(),
            )?;
        }
    }
    Ok(())
}

/// Truncate a row list to its template cap, logging what gets dropped.
fn capped<'a, T>(rows: &'a [T], cap: usize, section: &str) -> &'a [T] {
    if rows.len() > cap {
        warn!(
            "dropping {} {section} rows beyond the primary page cap of {cap}",
            rows.len() - cap
        );
        &rows[..cap]
    } else {
        rows
    }
}

fn draw_time_range(
    doc: &mut OverlayDocument,
    page: usize,
    range: &TimeRange,
    y: f64,
    from_x: f64,
    to_x: f64,
    duration_x: f64,
) -> Result<()> {
    let from = text(&range.from);
    let to = text(&range.to);
    let size = layout::DEFAULT_FONT_SIZE;
    doc.draw_text(page, from, from_x, y, size)?;
    doc.draw_text(page, to, to_x, y, size)?;
    doc.draw_text(page, &duration_hours(from, to), duration_x, y, size)?;
    Ok(())
}

fn draw_time_strip(doc: &mut OverlayDocument, page: usize, report: &DailyReport) -> Result<()> {
    for (i, range) in capped(&report.work_times, layout::WORK_TIME_ROWS, "work time")
        .iter()
        .enumerate()
    {
        draw_time_range(
            doc,
            page,
            range,
            TIME_STRIP.row_y(i),
            layout::WORK_TIME_FROM_X,
            layout::WORK_TIME_TO_X,
            layout::WORK_TIME_DURATION_X,
        )?;
    }

    for (i, range) in capped(&report.breaks, layout::BREAK_ROWS, "break")
        .iter()
        .enumerate()
    {
        draw_time_range(
            doc,
            page,
            range,
            TIME_STRIP.row_y(i),
            layout::BREAK_FROM_X,
            layout::BREAK_TO_X,
            layout::BREAK_DURATION_X,
        )?;
    }

    for (i, leg) in capped(&report.transports, layout::TRANSPORT_ROWS, "transport")
        .iter()
        .enumerate()
    {
        let y = TIME_STRIP.row_y(i);
        let size = layout::DEFAULT_FONT_SIZE;
        doc.draw_text(page, text(&leg.from), layout::TRANSPORT_FROM_X, y, size)?;
        doc.draw_text(page, text(&leg.to), layout::TRANSPORT_TO_X, y, size)?;
        doc.draw_text(page, text(&leg.km), layout::TRANSPORT_KM_X, y, size)?;
    }

    Ok(())
}

/// Drilling rows, then a marker row, then the wrapped remark lines, all
/// sharing one region. Overflow in any part is skipped, never reflowed.
fn draw_drilling_region(doc: &mut OverlayDocument, page: usize, report: &DailyReport) -> Result<()> {
    let mut cursor = RowCursor::new(DRILLING_REGION);
    let size = layout::DEFAULT_FONT_SIZE;

    for row in capped(&report.drilling, layout::DRILLING_ROWS, "drilling") {
        let Some(y) = cursor.next_row() else { continue };
        doc.draw_text(page, text(&row.point), layout::DRILLING_POINT_X, y, size)?;
        doc.draw_text(page, text(&row.depth), layout::DRILLING_DEPTH_X, y, size)?;
        doc.draw_text(
            page,
            text(&row.diameter),
            layout::DRILLING_DIAMETER_X,
            y,
            size,
        )?;

        for (key, x) in DRILLING_FLAG_COLUMNS {
            let cell = resolve_flag_value(key, &row.values, &row.flags);
            doc.draw_text(page, &cell, x, y, size)?;
        }
    }

    let remarks = text(&report.remarks);
    if !remarks.is_empty() {
        if let Some(y) = cursor.next_row() {
            doc.draw_text(page, layout::REMARK_MARKER_LABEL, layout::REMARK_X, y, size)?;
        }
        for line in wrap_lines(remarks, layout::REMARK_WRAP_CHARS)
            .iter()
            .take(layout::REMARK_MAX_LINES)
        {
            let Some(y) = cursor.next_row() else { break };
            doc.draw_text(page, line, layout::REMARK_X, y, size)?;
        }
    }

    Ok(())
}

fn draw_workers(doc: &mut OverlayDocument, page: usize, report: &DailyReport) -> Result<()> {
    let size = layout::DEFAULT_FONT_SIZE;
    for (i, worker) in capped(&report.workers, layout::WORKER_ROWS, "worker")
        .iter()
        .enumerate()
    {
        let y = WORKERS.row_y(i);
        doc.draw_text(page, text(&worker.name), layout::WORKER_NAME_X, y, size)?;

        for (j, cell) in worker
            .hours
            .iter()
            .take(layout::WORKER_HOUR_CELLS)
            .enumerate()
        {
            let x = layout::WORKER_HOURS_X0 + j as f64 * layout::WORKER_HOUR_DX;
            doc.draw_text(page, cell.trim(), x, y, size)?;
        }

        doc.draw_text(page, text(&worker.total), layout::WORKER_TOTAL_X, y, size)?;
    }
    Ok(())
}

/// Weekend duty is the one section that spills to a continuation page
/// instead of truncating: every active entry survives, on an extra page
/// rendered from the same template with the same rotation treatment.
fn draw_duty_continuation(doc: &mut OverlayDocument, report: &DailyReport) -> Result<()> {
    let active: Vec<&DutyRow> = report
        .weekend_duty
        .iter()
        .filter(|row| row.is_active())
        .collect();
    if active.is_empty() {
        return Ok(());
    }

    let page = doc.add_rotated_page()?;
    let size = layout::DEFAULT_FONT_SIZE;
    debug!("continuation page for {} weekend-duty entries", active.len());

    for (i, row) in active.iter().take(layout::DUTY_TIME_ROWS).enumerate() {
        let y = TIME_STRIP.row_y(i);
        let from = text(&row.from);
        let to = text(&row.to);
        doc.draw_text(page, from, layout::WORK_TIME_FROM_X, y, size)?;
        doc.draw_text(page, to, layout::WORK_TIME_TO_X, y, size)?;
        doc.draw_text(
            page,
            &duty_duration(row),
            layout::WORK_TIME_DURATION_X,
            y,
            size,
        )?;
    }

    for (i, row) in active.iter().take(layout::DUTY_NAME_ROWS).enumerate() {
        let y = WORKERS.row_y(i);
        doc.draw_text(page, text(&row.name), layout::WORKER_NAME_X, y, size)?;
        doc.draw_text(page, &duty_duration(row), layout::WORKER_TOTAL_X, y, size)?;
    }

    Ok(())
}

/// Legacy records carry the duration verbatim; newer ones derive it from
/// the time pair.
fn duty_duration(row: &DutyRow) -> String {
    let legacy = text(&row.duration);
    if !legacy.is_empty() {
        return legacy.to_string();
    }
    duration_hours(text(&row.from), text(&row.to))
}

/// Greedy word wrap for the remark lines. The same character-count
/// approximation as the wrap estimator, but yielding the lines themselves:
/// a word longer than the budget is split into budget-sized chunks, with
/// the trailing chunk open for further packing.
fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let budget = max_chars.max(1);
    let mut lines = Vec::new();

    for segment in text.replace("\r\n", "\n").replace('\r', "\n").split('\n') {
        let mut current = String::new();
        for word in segment.split_whitespace() {
            let len = word.chars().count();
            if len > budget {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(budget).peekable();
                while let Some(chunk) = chunks.next() {
                    let piece: String = chunk.iter().collect();
                    if chunks.peek().is_some() {
                        lines.push(piece);
                    } else {
                        current = piece;
                    }
                }
            } else if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + len <= budget {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
