//! Daily report record types
//!
//! The record is handed over whole by the persistence layer and is
//! read-only for the renderer. Every field tolerates absence: scalars are
//! `Option<String>` normalized through [`text`], row lists default to empty.

use crate::{ReportError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One daily construction report
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyReport {
    /// Report date, `YYYY-MM-DD`
    pub date: Option<String>,
    pub report_no: Option<String>,
    pub project: Option<String>,
    pub site: Option<String>,
    pub contractor: Option<String>,
    /// Drilling rig designation
    pub rig: Option<String>,
    pub temperature: Option<String>,
    /// Weather condition keys, see `layout::weather_anchor`
    pub weather: Vec<String>,
    pub work_times: Vec<TimeRange>,
    pub breaks: Vec<TimeRange>,
    pub transports: Vec<TransportLeg>,
    pub drilling: Vec<DrillingRow>,
    pub workers: Vec<WorkerRow>,
    pub weekend_duty: Vec<DutyRow>,
    pub remarks: Option<String>,
}

/// A from/to clock time pair
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// One transport leg
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportLeg {
    pub from: Option<String>,
    pub to: Option<String>,
    pub km: Option<String>,
}

/// One drilling table row. `values` holds explicit per-column entries,
/// `flags` the checked columns; `resolve_flag_value` arbitrates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrillingRow {
    pub point: Option<String>,
    pub depth: Option<String>,
    pub diameter: Option<String>,
    pub values: BTreeMap<String, String>,
    pub flags: Vec<String>,
}

/// One worker row with per-period hour cells
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerRow {
    pub name: Option<String>,
    pub hours: Vec<String>,
    pub total: Option<String>,
}

/// One weekend-duty entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DutyRow {
    /// Explicit activity flag; older records carry only a duration string
    pub active: Option<bool>,
    pub name: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub duration: Option<String>,
}

impl DutyRow {
    /// Whether this entry belongs on the continuation page.
    ///
    /// Active means the explicit flag is set OR the legacy duration string
    /// is non-empty, and the entry actually carries time data to render.
    /// Both predicates are kept deliberately: older payloads have no flag.
    pub fn is_active(&self) -> bool {
        let legacy = !text(&self.duration).is_empty();
        let flagged = self.active.unwrap_or(false) || legacy;
        let has_data = !text(&self.from).is_empty() || !text(&self.to).is_empty() || legacy;
        flagged && has_data
    }
}

/// Parse a report payload from JSON.
pub fn parse_report(json: &str) -> Result<DailyReport> {
    serde_json::from_str(json).map_err(|e| ReportError::Parse(e.to_string()))
}

/// Normalize an optional scalar to a trimmed string slice; absent and
/// whitespace-only values become empty. Never renders "null".
pub fn text(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}
