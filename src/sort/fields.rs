//! Comparison field specs
//!
//! A field list is a composite sort/compare key, most-significant field
//! first. Specs deserialize from `{"field": "...", "order": "ASC"|"DESC"}`
//! with `order` optional.

use serde::{Deserialize, Serialize};

/// Sort direction for a comparison field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Returns true for the ascending direction
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// A single comparison field: name plus direction, ascending by default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field to compare by
    pub field: String,
    /// Sort direction
    #[serde(default)]
    pub order: SortDirection,
}

impl FieldSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortDirection::Desc,
        }
    }
}
