//! Field Calc - Derived render values
//!
//! This crate provides the pure computations the overlay renderers need:
//! - Weekday index from a strict `YYYY-MM-DD` date string
//! - Clock time parsing and decimal-hour durations
//! - Checkbox/flag resolution for flag-bearing table cells
//! - Wrapped line estimation for row-height growth
//!
//! Every function here is total: malformed input degrades to `None` or an
//! empty string so a single bad field never aborts a render.

mod clock;
mod date;
mod flags;
mod wrap;

pub use clock::{duration_hours, parse_clock_minutes};
pub use date::weekday_index;
pub use flags::resolve_flag_value;
pub use wrap::{estimate_wrapped_line_count, grown_row_height};
