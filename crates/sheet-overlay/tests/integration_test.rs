//! End-to-end render tests for the gauge protocol workbook
//!
//! A template workbook is synthesized with rust_xlsxwriter, rendered onto,
//! and the output is re-read with calamine to assert on cell values.

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use sheet_overlay::{render_gauge_sheet, GaugeSheet, MeasurementRow, SheetError};
use std::io::Cursor;

/// Build a template workbook with a pre-filled header cell and stale
/// measurement junk inside the data region.
fn template(sheet_name: &str) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();
    worksheet.write_string(0, 0, "Pegelprotokoll").unwrap();
    worksheet.write_string(1, 1, "Projekt:").unwrap();
    worksheet.write_string(1, 2, "Altlast Sued").unwrap();
    // Leftovers from a previous campaign, must not survive a render
    worksheet.write_string(12, 1, "08:15").unwrap();
    worksheet.write_number(13, 2, 9.99).unwrap();
    worksheet.write_string(14, 4, "altes Protokoll").unwrap();
    workbook.save_to_buffer().unwrap()
}

fn output_range(bytes: &[u8]) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec())).unwrap();
    workbook.worksheet_range("Pegel").unwrap()
}

fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(f)) => f.to_string(),
        Some(other) if *other != Data::Empty => other.to_string(),
        _ => String::new(),
    }
}

/// Empty cell, whether inside or outside the output's used range.
fn is_blank(range: &Range<Data>, row: u32, col: u32) -> bool {
    matches!(range.get_value((row, col)), None | Some(Data::Empty))
}

fn row(label: &str, level: &str, instant: &str, remarks: &str) -> MeasurementRow {
    let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
    MeasurementRow {
        label: opt(label),
        level: opt(level),
        instant: opt(instant),
        remarks: opt(remarks),
    }
}

#[test]
fn renders_header_blocks_and_divider() {
    let sheet = GaugeSheet {
        project: Some("Umgehung Nord".to_string()),
        bore_point: Some("B 7".to_string()),
        gauge_no: Some("P 3".to_string()),
        primary: vec![
            row("08:00", "1,25", "", "klar"),
            row("08:05", "1,31", "0,8", ""),
        ],
        secondary: vec![row("09:00", "1,10", "", "")],
        ..Default::default()
    };

    let bytes = render_gauge_sheet(&template("Pegel"), &sheet).unwrap();
    let range = output_range(&bytes);

    // Header cells
    assert_eq!(cell_text(&range, 1, 2), "Umgehung Nord");
    assert_eq!(cell_text(&range, 2, 2), "B 7");
    assert_eq!(cell_text(&range, 2, 6), "P 3");
    // Template content outside the data region survives
    assert_eq!(cell_text(&range, 0, 0), "Pegelprotokoll");
    assert_eq!(cell_text(&range, 1, 1), "Projekt:");

    // Drawdown block, numeric readings as numbers
    assert_eq!(cell_text(&range, 10, 1), "08:00");
    assert_eq!(range.get_value((10, 2)), Some(&Data::Float(1.25)));
    assert_eq!(cell_text(&range, 10, 4), "klar");
    assert_eq!(cell_text(&range, 11, 1), "08:05");

    // Divider two blank rows below the drawdown block, rebound after it
    assert_eq!(cell_text(&range, 14, 1), "Wiederanstieg");
    assert_eq!(cell_text(&range, 15, 1), "09:00");
    assert_eq!(range.get_value((15, 2)), Some(&Data::Float(1.1)));
}

#[test]
fn stale_template_data_is_cleared() {
    let sheet = GaugeSheet {
        primary: vec![row("08:00", "1,25", "", "")],
        ..Default::default()
    };
    let range = output_range(&render_gauge_sheet(&template("Pegel"), &sheet).unwrap());

    // The junk rows from the template are gone even where nothing new
    // was written over them
    assert_eq!(cell_text(&range, 12, 1), "");
    assert_eq!(cell_text(&range, 13, 2), "");
    assert_eq!(cell_text(&range, 14, 4), "");
}

#[test]
fn empty_header_field_keeps_the_template_value() {
    let sheet = GaugeSheet {
        project: Some("   ".to_string()),
        ..Default::default()
    };
    let range = output_range(&render_gauge_sheet(&template("Pegel"), &sheet).unwrap());
    assert_eq!(cell_text(&range, 1, 2), "Altlast Sued");
}

#[test]
fn instant_reading_is_written_once_per_block() {
    let sheet = GaugeSheet {
        primary: vec![
            row("08:00", "1,25", "", ""),
            row("08:05", "1,31", "0,8", ""),
            row("08:10", "1,40", "0,9", ""),
        ],
        secondary: vec![
            row("09:00", "1,10", "1,2", ""),
            row("09:05", "1,05", "1,3", ""),
        ],
        ..Default::default()
    };
    let range = output_range(&render_gauge_sheet(&template("Pegel"), &sheet).unwrap());

    // First supplied value per block wins, the rest stay blank
    assert!(is_blank(&range, 10, 3));
    assert_eq!(range.get_value((11, 3)), Some(&Data::Float(0.8)));
    assert!(is_blank(&range, 12, 3));
    // The rule restarts for the rebound block
    assert_eq!(range.get_value((16, 3)), Some(&Data::Float(1.2)));
    assert!(is_blank(&range, 17, 3));
}

#[test]
fn shrinking_rewrite_leaves_no_stale_rows() {
    let long = GaugeSheet {
        primary: (0..5).map(|i| row(&format!("08:0{i}"), "1,00", "", "")).collect(),
        ..Default::default()
    };
    let first = render_gauge_sheet(&template("Pegel"), &long).unwrap();

    let short = GaugeSheet {
        primary: vec![row("10:00", "2,00", "", "")],
        ..Default::default()
    };
    let range = output_range(&render_gauge_sheet(&first, &short).unwrap());

    assert_eq!(cell_text(&range, 10, 1), "10:00");
    // The divider moved up to match the shorter block
    assert_eq!(cell_text(&range, 13, 1), "Wiederanstieg");
    // Rows 11..14 held the longer first write, including its divider at 17
    for r in [11, 12, 14, 15, 16, 17] {
        assert!(is_blank(&range, r, 1), "row {r} should be empty");
    }
}

#[test]
fn rendering_is_deterministic() {
    let template = template("Pegel");
    let sheet = GaugeSheet {
        project: Some("Umgehung Nord".to_string()),
        primary: vec![row("08:00", "1,25", "0,8", "klar")],
        secondary: vec![row("09:00", "1,10", "", "")],
        ..Default::default()
    };
    let first = render_gauge_sheet(&template, &sheet).unwrap();
    let second = render_gauge_sheet(&template, &sheet).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_worksheet_is_a_structural_error() {
    let result = render_gauge_sheet(&template("Tabelle1"), &GaugeSheet::default());
    assert!(matches!(result, Err(SheetError::WorksheetNotFound(name)) if name == "Pegel"));
}

#[test]
fn unreadable_template_is_a_template_error() {
    let result = render_gauge_sheet(b"not a workbook", &GaugeSheet::default());
    assert!(matches!(result, Err(SheetError::Template(_))));
}
