//! Product-name parsing.

pub mod casefold;
pub mod name;

pub use casefold::{fold_lower, fold_upper, match_form};
pub use name::{interpret, scan_dimensions, scan_segment_count};
