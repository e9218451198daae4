//! Field-ordered sorting for row sequences
//!
//! Sorts rows by an ordered list of (field, direction) specs, stably and
//! in place. The ordering a multi-field list produces is decided by its
//! leading spec; see [`RowSorter::compare_rows`].

mod fields;
mod sorter;

pub use fields::{FieldSpec, SortDirection};
pub use sorter::RowSorter;
