//! Cell map for the gauge protocol template
//!
//! All addresses are zero-based (row, column) into the one target
//! worksheet. Like the report coordinate map, these values are tied to the
//! shipped template asset; a template revision means re-measuring here.

pub const WORKSHEET_NAME: &str = "Pegel";

// --- Header cells ------------------------------------------------------------

pub const PROJECT_CELL: (u32, u16) = (1, 2);
pub const BORE_POINT_CELL: (u32, u16) = (2, 2);
pub const EDITOR_CELL: (u32, u16) = (3, 2);
pub const DATE_CELL: (u32, u16) = (1, 6);
pub const GAUGE_NO_CELL: (u32, u16) = (2, 6);

// --- Data region -------------------------------------------------------------

/// First row of the measurement region
pub const DATA_START_ROW: u32 = 10;

/// Rows cleared before writing, sized for the worst combined block length
pub const CLEAR_ROW_COUNT: u32 = 48;

pub const COL_LABEL: u16 = 1;
pub const COL_LEVEL: u16 = 2;
pub const COL_INSTANT: u16 = 3;
pub const COL_REMARKS: u16 = 4;

/// The four columns the clearing pass covers
pub const DATA_COLUMNS: [u16; 4] = [COL_LABEL, COL_LEVEL, COL_INSTANT, COL_REMARKS];

/// Blank rows between the primary block and the divider row
pub const MARKER_GAP: u32 = 2;

/// Divider label opening the rebound block
pub const SECTION_DIVIDER_LABEL: &str = "Wiederanstieg";

// --- Remark wrapping ---------------------------------------------------------

pub const REMARK_WRAP_CHARS: usize = 38;
pub const REMARK_MAX_LINES: usize = 6;

/// Template default row height in points
pub const BASE_ROW_HEIGHT: f64 = 14.25;
/// Height added per extra wrapped remark line
pub const EXTRA_LINE_HEIGHT: f64 = 12.0;

/// Whether a cell address falls inside the cleared data region.
pub fn in_clear_region(row: u32, col: u16) -> bool {
    row >= DATA_START_ROW
        && row < DATA_START_ROW + CLEAR_ROW_COUNT
        && DATA_COLUMNS.contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_region_bounds() {
        assert!(in_clear_region(DATA_START_ROW, COL_LABEL));
        assert!(in_clear_region(DATA_START_ROW + CLEAR_ROW_COUNT - 1, COL_REMARKS));
        assert!(!in_clear_region(DATA_START_ROW - 1, COL_LABEL));
        assert!(!in_clear_region(DATA_START_ROW + CLEAR_ROW_COUNT, COL_LABEL));
        // Column outside the data columns is untouched
        assert!(!in_clear_region(DATA_START_ROW, 0));
        assert!(!in_clear_region(DATA_START_ROW, 7));
    }

    #[test]
    fn header_cells_sit_above_the_data_region() {
        for (row, _) in [PROJECT_CELL, BORE_POINT_CELL, EDITOR_CELL, DATE_CELL, GAUGE_NO_CELL] {
            assert!(row < DATA_START_ROW);
        }
    }
}
