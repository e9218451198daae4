//! Input validation for comparison sessions
//!
//! Shape checks run before any data is compared:
//! - master must be an array of record-shaped rows
//! - detail must be an array of rows (single mode) or an array of
//!   arrays of rows (multiple mode)
//! - paired field lists must agree in length and per-position direction

mod validator;

pub use validator::RowValidator;
