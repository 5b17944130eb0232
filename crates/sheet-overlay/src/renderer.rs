//! Gauge protocol workbook rendering
//!
//! The template workbook is not edited in place: calamine reads its cell
//! values, rust_xlsxwriter writes a fresh workbook carrying every template
//! cell outside the data region. Skipping the data region during the copy
//! is the clearing pass, so no stale measurement from a previous render
//! can survive into the output.

use crate::layout;
use crate::payload::{text, GaugeSheet, MeasurementRow};
use crate::{Result, SheetError};
use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use field_calc::{estimate_wrapped_line_count, grown_row_height};
use log::debug;
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::io::Cursor;

/// Render a gauge measurement protocol into the spreadsheet template.
///
/// Header values are written only when non-empty, leaving the template's
/// own cell content alone otherwise. The data region is always rebuilt
/// from scratch: drawdown block, divider row, rebound block.
pub fn render_gauge_sheet(template_bytes: &[u8], sheet: &GaugeSheet) -> Result<Vec<u8>> {
    let mut template = open_workbook_from_rs::<Xlsx<_>, _>(Cursor::new(template_bytes))
        .map_err(|e| SheetError::Template(e.to_string()))?;

    if !template
        .sheet_names()
        .iter()
        .any(|name| name == layout::WORKSHEET_NAME)
    {
        return Err(SheetError::WorksheetNotFound(
            layout::WORKSHEET_NAME.to_string(),
        ));
    }
    let range = template
        .worksheet_range(layout::WORKSHEET_NAME)
        .map_err(|e| SheetError::Template(e.to_string()))?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(layout::WORKSHEET_NAME)?;

    copy_template_cells(worksheet, &range)?;
    write_header(worksheet, sheet)?;

    let remark_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);
    write_block(worksheet, &sheet.primary, layout::DATA_START_ROW, &remark_format)?;

    let marker_row = layout::DATA_START_ROW + sheet.primary.len() as u32 + layout::MARKER_GAP;
    worksheet.write_string(marker_row, layout::COL_LABEL, layout::SECTION_DIVIDER_LABEL)?;
    write_block(worksheet, &sheet.secondary, marker_row + 1, &remark_format)?;

    debug!(
        "rendered gauge sheet with {} drawdown and {} rebound rows",
        sheet.primary.len(),
        sheet.secondary.len()
    );
    workbook.save_to_buffer().map_err(Into::into)
}

/// Carry template cell values over, leaving the data region blank.
fn copy_template_cells(worksheet: &mut Worksheet, range: &Range<Data>) -> Result<()> {
    let Some((start_row, start_col)) = range.start() else {
        return Ok(());
    };

    for (r, c, cell) in range.used_cells() {
        let row = start_row + r as u32;
        let col = (start_col + c as u32) as u16;
        if layout::in_clear_region(row, col) {
            continue;
        }
        match cell {
            Data::String(s) => {
                worksheet.write_string(row, col, s)?;
            }
            Data::Float(f) => {
                worksheet.write_number(row, col, *f)?;
            }
            Data::Int(i) => {
                worksheet.write_number(row, col, *i as f64)?;
            }
            Data::Bool(b) => {
                worksheet.write_boolean(row, col, *b)?;
            }
            Data::DateTime(dt) => {
                worksheet.write_number(row, col, dt.as_f64())?;
            }
            Data::DateTimeIso(s) | Data::DurationIso(s) => {
                worksheet.write_string(row, col, s)?;
            }
            Data::Error(_) | Data::Empty => {}
        }
    }
    Ok(())
}

/// Write a header value only when the payload actually carries one.
fn write_header(worksheet: &mut Worksheet, sheet: &GaugeSheet) -> Result<()> {
    let cells = [
        (layout::PROJECT_CELL, text(&sheet.project)),
        (layout::BORE_POINT_CELL, text(&sheet.bore_point)),
        (layout::EDITOR_CELL, text(&sheet.editor)),
        (layout::DATE_CELL, text(&sheet.date)),
        (layout::GAUGE_NO_CELL, text(&sheet.gauge_no)),
    ];
    for ((row, col), value) in cells {
        if !value.is_empty() {
            worksheet.write_string(row, col, value)?;
        }
    }
    Ok(())
}

/// Write one measurement block starting at `start_row`.
///
/// The instantaneous reading is recorded once per block, from the first
/// row that supplies one; later values in the same block are ignored.
fn write_block(
    worksheet: &mut Worksheet,
    rows: &[MeasurementRow],
    start_row: u32,
    remark_format: &Format,
) -> Result<()> {
    let mut instant_written = false;

    for (i, measurement) in rows.iter().enumerate() {
        let row = start_row + i as u32;

        let label = text(&measurement.label);
        if !label.is_empty() {
            worksheet.write_string(row, layout::COL_LABEL, label)?;
        }

        write_reading(worksheet, row, layout::COL_LEVEL, text(&measurement.level))?;

        let instant = text(&measurement.instant);
        if !instant_written && !instant.is_empty() {
            write_reading(worksheet, row, layout::COL_INSTANT, instant)?;
            instant_written = true;
        }

        let remarks = text(&measurement.remarks);
        if !remarks.is_empty() {
            worksheet.write_string_with_format(row, layout::COL_REMARKS, remarks, remark_format)?;
            let lines = estimate_wrapped_line_count(
                remarks,
                layout::REMARK_WRAP_CHARS,
                layout::REMARK_MAX_LINES,
            );
            worksheet.set_row_height(
                row,
                grown_row_height(layout::BASE_ROW_HEIGHT, layout::EXTRA_LINE_HEIGHT, lines),
            )?;
        }
    }
    Ok(())
}

/// Readings are numeric cells when they parse as numbers (decimal comma
/// accepted), text cells otherwise.
fn write_reading(worksheet: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    match numeric(value) {
        Some(n) => worksheet.write_number(row, col, n)?,
        None => worksheet.write_string(row, col, value)?,
    };
    Ok(())
}

fn numeric(value: &str) -> Option<f64> {
    value.replace(',', ".").parse().ok()
}
