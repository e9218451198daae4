//! Comparison Cursor subsystem
//!
//! Tracks parallel positions into master and detail data and decides
//! whether the rows under the cursors match a composite field key,
//! advancing the detail side past rows that sort strictly ahead of the
//! current master row.
//!
//! # Compare Flow (strict order)
//!
//! 1. Resolve the addressed detail collection
//! 2. Bounds guard: an exhausted detail (or master) is a clean no-match
//! 3. Lazily re-establish sort order unless marked pre-sorted
//! 4. Read the row pair under the cursors
//! 5. Run the composite comparison over the paired field lists
//! 6. Detail behind: advance that detail cursor and retry
//! 7. Equal is a match; master behind is a no-match

mod cursor;
mod detail;

pub use cursor::ComparisonCursor;
pub use detail::{DetailMode, DetailSet};
