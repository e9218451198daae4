//! rowmatch - master-detail record comparison over JSON rows
//!
//! Walks an ordered master collection and one or more detail collections
//! in lockstep, merge-join style, matching rows under a composite field key.

pub mod cursor;
pub mod errors;
pub mod observability;
pub mod sort;
pub mod validate;
