//! Coordinate map for the daily report template
//!
//! Every anchor below is in the un-rotated template page space (origin
//! bottom-left, points). The values are hand-calibrated against the one
//! shipped template asset via the calibration probe; the row caps encode
//! that template's printable area, not a general limit. Moving a field is a
//! data change here, never a code change in the renderer.

/// A field anchor on the template page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    /// Font size override; `DEFAULT_FONT_SIZE` when absent
    pub font_size: Option<f64>,
}

const fn at(x: f64, y: f64) -> Anchor {
    Anchor {
        x,
        y,
        font_size: None,
    }
}

const fn at_sized(x: f64, y: f64, font_size: f64) -> Anchor {
    Anchor {
        x,
        y,
        font_size: Some(font_size),
    }
}

pub const DEFAULT_FONT_SIZE: f64 = 9.0;

/// Scalar header fields of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Date,
    ReportNo,
    Project,
    Site,
    Contractor,
    Rig,
    Temperature,
}

/// Anchor for a scalar header field. Exhaustive by construction: a new
/// field name cannot exist without a position.
pub fn scalar_anchor(field: ScalarField) -> Anchor {
    match field {
        ScalarField::Date => at(92.0, 806.0),
        ScalarField::ReportNo => at_sized(508.0, 806.0, 11.0),
        ScalarField::Project => at(92.0, 788.0),
        ScalarField::Site => at(92.0, 770.0),
        ScalarField::Contractor => at(340.0, 788.0),
        ScalarField::Rig => at(340.0, 770.0),
        ScalarField::Temperature => at_sized(538.0, 752.0, 8.0),
    }
}

/// Weekday checkbox anchors, indexed by `weekday_index` (0 = Sunday).
/// The printed form orders the boxes Mo..So, hence Sunday sits last.
pub const WEEKDAY_ANCHORS: [Anchor; 7] = [
    at(478.0, 770.0), // So
    at(334.0, 770.0), // Mo
    at(358.0, 770.0), // Di
    at(382.0, 770.0), // Mi
    at(406.0, 770.0), // Do
    at(430.0, 770.0), // Fr
    at(454.0, 770.0), // Sa
];

/// Size of the translucent weather highlight
pub const WEATHER_MARK_WIDTH: f64 = 30.0;
pub const WEATHER_MARK_HEIGHT: f64 = 10.0;

/// Anchor of a weather condition's label box on the form. Unknown keys are
/// simply not rendered.
pub fn weather_anchor(key: &str) -> Option<Anchor> {
    let anchor = match key {
        "sonne" => at(66.0, 748.0),
        "bewoelkt" => at(110.0, 748.0),
        "regen" => at(154.0, 748.0),
        "schnee" => at(198.0, 748.0),
        "frost" => at(242.0, 748.0),
        _ => return None,
    };
    Some(anchor)
}

/// A repeating table region: rows grow downward from `start_y` until
/// `bottom_y`, the page-area bound below which rows are skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    pub start_y: f64,
    pub row_height: f64,
    pub bottom_y: f64,
}

impl TableLayout {
    /// Baseline y of the row at `index`, ignoring the bottom bound.
    pub fn row_y(&self, index: usize) -> f64 {
        self.start_y - index as f64 * self.row_height
    }
}

// --- Work time / break / transport strip -----------------------------------

pub const WORK_TIME_ROWS: usize = 2;
pub const BREAK_ROWS: usize = 2;
pub const TRANSPORT_ROWS: usize = 2;

pub const TIME_STRIP: TableLayout = TableLayout {
    start_y: 722.0,
    row_height: 13.0,
    bottom_y: 700.0,
};

pub const WORK_TIME_FROM_X: f64 = 66.0;
pub const WORK_TIME_TO_X: f64 = 112.0;
pub const WORK_TIME_DURATION_X: f64 = 158.0;

pub const BREAK_FROM_X: f64 = 214.0;
pub const BREAK_TO_X: f64 = 256.0;
pub const BREAK_DURATION_X: f64 = 298.0;

pub const TRANSPORT_FROM_X: f64 = 352.0;
pub const TRANSPORT_TO_X: f64 = 428.0;
pub const TRANSPORT_KM_X: f64 = 504.0;

// --- Drilling table region --------------------------------------------------

/// Visible drilling rows on the primary page; anything beyond is dropped.
pub const DRILLING_ROWS: usize = 5;

/// The drilling rows, the remark marker row and the wrapped remark lines
/// all share this region.
pub const DRILLING_REGION: TableLayout = TableLayout {
    start_y: 664.0,
    row_height: 18.0,
    bottom_y: 420.0,
};

pub const DRILLING_POINT_X: f64 = 58.0;
pub const DRILLING_DEPTH_X: f64 = 118.0;
pub const DRILLING_DIAMETER_X: f64 = 166.0;

/// Flag-bearing columns of the drilling table with their x offsets
pub const DRILLING_FLAG_COLUMNS: [(&str, f64); 6] = [
    ("KP", 218.0),
    ("SPT", 258.0),
    ("RKS", 298.0),
    ("BK", 338.0),
    ("GWM", 378.0),
    ("VERR", 418.0),
];

pub const REMARK_MARKER_LABEL: &str = "Bemerkungen:";
pub const REMARK_X: f64 = 58.0;
pub const REMARK_WRAP_CHARS: usize = 96;
pub const REMARK_MAX_LINES: usize = 8;

// --- Worker table -----------------------------------------------------------

pub const WORKER_ROWS: usize = 3;
pub const WORKER_HOUR_CELLS: usize = 16;

pub const WORKERS: TableLayout = TableLayout {
    start_y: 382.0,
    row_height: 16.0,
    bottom_y: 330.0,
};

pub const WORKER_NAME_X: f64 = 58.0;
pub const WORKER_HOURS_X0: f64 = 150.0;
pub const WORKER_HOUR_DX: f64 = 23.0;
pub const WORKER_TOTAL_X: f64 = 530.0;

// --- Weekend-duty continuation page -----------------------------------------

/// On the continuation page duty entries reuse the work-time anchors (up to
/// two rows) and the worker name/duration anchors (up to three rows).
pub const DUTY_TIME_ROWS: usize = 2;
pub const DUTY_NAME_ROWS: usize = 3;
