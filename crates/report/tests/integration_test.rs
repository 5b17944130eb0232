//! End-to-end render tests for the daily report
//!
//! A minimal template is synthesized with lopdf, a report record is
//! rendered onto it, and the output content streams are inspected.

use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use pretty_assertions::assert_eq;
use report::{parse_report, render_calibration, render_daily_report, DailyReport};

/// Build a 595x842 one-page PDF standing in for the report form.
fn minimal_template() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let content_id = doc.add_object(Stream::new(
        Dictionary::new(),
        b"0.5 w\n40 40 200 100 re\nS\n".to_vec(),
    ));
    let resources_id = doc.add_object(Object::Dictionary(Dictionary::new()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        "Contents" => Object::Reference(content_id),
        "Resources" => Object::Reference(resources_id),
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn page_content(bytes: &[u8], page: u32) -> String {
    let doc = Document::load_mem(bytes).unwrap();
    let page_id = *doc.get_pages().get(&page).unwrap();
    let page_dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let contents_id = page_dict.get(b"Contents").unwrap().as_reference().unwrap();
    let stream = doc.get_object(contents_id).unwrap().as_stream().unwrap();
    String::from_utf8_lossy(&stream.content).into_owned()
}

fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

#[test]
fn full_report_renders_onto_one_page() {
    let report = parse_report(
        r#"{
            "date": "2024-03-18",
            "reportNo": "117",
            "project": "Umgehung Nord",
            "weather": ["regen"],
            "workTimes": [{ "from": "07:00", "to": "16:30" }],
            "transports": [{ "from": "Lager", "to": "BS 4", "km": "18" }],
            "drilling": [
                { "point": "B1", "depth": "12,5", "diameter": "178", "flags": ["RKS"] }
            ],
            "workers": [{ "name": "Krause", "hours": ["8", "8"], "total": "16,00" }],
            "remarks": "Spuelung verloren bei 12 m"
        }"#,
    )
    .unwrap();

    let bytes = render_daily_report(&report, &minimal_template()).unwrap();
    assert_eq!(page_count(&bytes), 1);

    let content = page_content(&bytes, 1);
    assert!(content.contains("/Tpl Do"));
    assert!(content.contains("(117) Tj"));
    assert!(content.contains("(Umgehung Nord) Tj"));
    // 2024-03-18 is a Monday
    assert!(content.contains("(X) Tj"));
    assert!(content.contains("334 770 Td"));
    // Derived work-time duration
    assert!(content.contains("(9,50) Tj"));
    // Weather mark is a translucent rectangle, not a glyph
    assert!(content.contains("/GSa gs"));
    assert!(content.contains("(Krause) Tj"));
    assert!(content.contains("(Bemerkungen:) Tj"));
    assert!(content.contains("(Spuelung verloren bei 12 m) Tj"));
}

#[test]
fn drilling_rows_beyond_the_cap_are_dropped() {
    let rows: Vec<String> = (1..=7)
        .map(|i| format!(r#"{{ "point": "B{i}" }}"#))
        .collect();
    let json = format!(r#"{{ "drilling": [{}] }}"#, rows.join(","));
    let report = parse_report(&json).unwrap();

    let content = page_content(
        &render_daily_report(&report, &minimal_template()).unwrap(),
        1,
    );
    assert!(content.contains("(B5) Tj"));
    assert!(!content.contains("(B6) Tj"));
    assert!(!content.contains("(B7) Tj"));
}

#[test]
fn malformed_date_draws_no_weekday_mark() {
    let report = parse_report(r#"{ "date": "18.03.2024" }"#).unwrap();
    let content = page_content(
        &render_daily_report(&report, &minimal_template()).unwrap(),
        1,
    );
    // Date text still appears, the checkbox glyph does not
    assert!(content.contains("(18.03.2024) Tj"));
    assert!(!content.contains("(X) Tj"));
}

#[test]
fn empty_record_is_a_valid_single_page() {
    let report = DailyReport::default();
    let bytes = render_daily_report(&report, &minimal_template()).unwrap();
    assert_eq!(page_count(&bytes), 1);
    assert!(page_content(&bytes, 1).contains("/Tpl Do"));
}

#[test]
fn active_weekend_duty_spills_to_a_continuation_page() {
    let report = parse_report(
        r#"{
            "weekendDuty": [
                { "active": true, "name": "Krause", "from": "08:00", "to": "12:00" },
                { "name": "Weber", "duration": "3,50" },
                { "active": false, "name": "Lenz", "from": "09:00" },
                { "name": "Roth" }
            ]
        }"#,
    )
    .unwrap();

    let bytes = render_daily_report(&report, &minimal_template()).unwrap();
    assert_eq!(page_count(&bytes), 2);

    let second = page_content(&bytes, 2);
    assert!(second.contains("/Tpl Do"));
    assert!(second.contains("(Krause) Tj"));
    assert!(second.contains("(4,00) Tj"));
    // Legacy duration is rendered verbatim
    assert!(second.contains("(Weber) Tj"));
    assert!(second.contains("(3,50) Tj"));
    // Inactive entries never reach the continuation page
    assert!(!second.contains("(Lenz) Tj"));
    assert!(!second.contains("(Roth) Tj"));
}

#[test]
fn inactive_weekend_duty_adds_no_page() {
    let report = parse_report(
        r#"{ "weekendDuty": [{ "active": false, "name": "Lenz", "from": "09:00" }] }"#,
    )
    .unwrap();
    let bytes = render_daily_report(&report, &minimal_template()).unwrap();
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn continuation_name_rows_are_capped() {
    let rows: Vec<String> = (1..=5)
        .map(|i| format!(r#"{{ "active": true, "name": "D{i}", "from": "08:00", "to": "10:00" }}"#))
        .collect();
    let json = format!(r#"{{ "weekendDuty": [{}] }}"#, rows.join(","));
    let report = parse_report(&json).unwrap();

    let second = page_content(
        &render_daily_report(&report, &minimal_template()).unwrap(),
        2,
    );
    assert!(second.contains("(D3) Tj"));
    assert!(!second.contains("(D4) Tj"));
    assert!(!second.contains("(D5) Tj"));
}

#[test]
fn rendering_is_deterministic() {
    let template = minimal_template();
    let report = parse_report(r#"{ "date": "2024-03-18", "reportNo": "117" }"#).unwrap();
    let first = render_daily_report(&report, &template).unwrap();
    let second = render_daily_report(&report, &template).unwrap();
    assert_eq!(first, second);
}

#[test]
fn calibration_probe_draws_grid_and_marker() {
    let bytes = render_calibration(&minimal_template(), Some(50.0), Some((120.0, 340.0))).unwrap();
    let content = page_content(&bytes, 1);
    assert!(content.contains("(50) Tj"));
    assert!(content.contains("(120,340) Tj"));
}
