//! # Comparison Errors
//!
//! Error types shared across the comparison pipeline. All errors are
//! fatal and synchronous: a session that produced one must not be used.

use thiserror::Error;

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors raised while constructing or driving a comparison session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    // ==================
    // Construction Errors
    // ==================

    /// Master or detail data was null/absent
    #[error("\"{0}\" is missing")]
    MissingInput(&'static str),

    /// Master or detail data is not an array of record-shaped rows
    #[error("\"{0}\" is invalid")]
    InvalidShape(&'static str),

    // ==================
    // Field Validation Errors
    // ==================

    /// Paired field specs disagree on sort direction
    #[error("order is different between {master_field} and {detail_field}")]
    OrderMismatch {
        master_field: String,
        detail_field: String,
    },

    /// Master and detail field lists have different lengths
    #[error("field lists differ in length ({master} master, {detail} detail)")]
    FieldCountMismatch { master: usize, detail: usize },

    // ==================
    // Session Errors
    // ==================

    /// An operation addressed a detail collection that does not exist
    #[error("detail collection {index} does not exist ({count} available)")]
    DetailIndexOutOfRange { index: usize, count: usize },
}

impl CompareError {
    /// Create a missing input error for the named side
    pub fn missing_input(side: &'static str) -> Self {
        Self::MissingInput(side)
    }

    /// Create an invalid shape error for the named side
    pub fn invalid_shape(side: &'static str) -> Self {
        Self::InvalidShape(side)
    }

    /// Create an order mismatch error naming both field specs
    pub fn order_mismatch(
        master_field: impl Into<String>,
        detail_field: impl Into<String>,
    ) -> Self {
        Self::OrderMismatch {
            master_field: master_field.into(),
            detail_field: detail_field.into(),
        }
    }

    /// Create a detail index error
    pub fn detail_index_out_of_range(index: usize, count: usize) -> Self {
        Self::DetailIndexOutOfRange { index, count }
    }

    /// Get the stable string code for log output
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => "MISSING_INPUT",
            Self::InvalidShape(_) => "INVALID_SHAPE",
            Self::OrderMismatch { .. } => "ORDER_MISMATCH",
            Self::FieldCountMismatch { .. } => "FIELD_COUNT_MISMATCH",
            Self::DetailIndexOutOfRange { .. } => "DETAIL_INDEX_OUT_OF_RANGE",
        }
    }
}
