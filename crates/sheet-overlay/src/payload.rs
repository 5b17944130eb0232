//! Gauge protocol payload types

use serde::Deserialize;

/// One gauge measurement protocol, header plus the two measurement blocks
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaugeSheet {
    pub project: Option<String>,
    pub bore_point: Option<String>,
    /// Measurement date, free-form as written on the protocol
    pub date: Option<String>,
    pub gauge_no: Option<String>,
    pub editor: Option<String>,
    /// Drawdown measurements, written at the top of the data region
    pub primary: Vec<MeasurementRow>,
    /// Rebound measurements, written below the section divider
    pub secondary: Vec<MeasurementRow>,
}

/// One measurement row
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasurementRow {
    /// Timestamp or elapsed-time label
    pub label: Option<String>,
    /// Water level reading
    pub level: Option<String>,
    /// Instantaneous discharge reading, recorded once per block
    pub instant: Option<String>,
    pub remarks: Option<String>,
}

/// Normalize an optional scalar to a trimmed string slice.
pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_normalization() {
        assert_eq!(text(&None), "");
        assert_eq!(text(&Some(" 1,25 ".to_string())), "1,25");
    }
}
