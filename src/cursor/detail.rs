//! Detail collection storage for single and multiple mode

use serde_json::Value;

/// Detail shape detected at validation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    /// One detail collection
    Single,
    /// An ordered list of detail collections
    Multiple,
}

impl DetailMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailMode::Single => "single",
            DetailMode::Multiple => "multiple",
        }
    }
}

/// The detail side of a comparison session: one row sequence, or many
#[derive(Debug, Clone)]
pub enum DetailSet {
    Single(Vec<Value>),
    Multiple(Vec<Vec<Value>>),
}

impl DetailSet {
    /// Builds the detail set from validated elements per the detected mode.
    ///
    /// Shapes are checked by the validator before this runs; a non-array
    /// element in multiple mode becomes an empty collection.
    pub fn from_elements(elements: Vec<Value>, mode: DetailMode) -> Self {
        match mode {
            DetailMode::Single => DetailSet::Single(elements),
            DetailMode::Multiple => DetailSet::Multiple(
                elements
                    .into_iter()
                    .map(|collection| match collection {
                        Value::Array(rows) => rows,
                        _ => Vec::new(),
                    })
                    .collect(),
            ),
        }
    }

    /// The detected mode
    pub fn mode(&self) -> DetailMode {
        match self {
            DetailSet::Single(_) => DetailMode::Single,
            DetailSet::Multiple(_) => DetailMode::Multiple,
        }
    }

    /// True when holding an ordered list of collections
    pub fn is_multiple(&self) -> bool {
        matches!(self, DetailSet::Multiple(_))
    }

    /// Number of detail collections (always 1 in single mode)
    pub fn collection_count(&self) -> usize {
        match self {
            DetailSet::Single(_) => 1,
            DetailSet::Multiple(collections) => collections.len(),
        }
    }

    /// Rows of the addressed collection, if it exists
    pub fn collection(&self, index: usize) -> Option<&[Value]> {
        match self {
            DetailSet::Single(rows) => (index == 0).then_some(rows.as_slice()),
            DetailSet::Multiple(collections) => {
                collections.get(index).map(|rows| rows.as_slice())
            }
        }
    }

    /// Row at `position` of collection `index`
    pub fn row(&self, index: usize, position: usize) -> Option<&Value> {
        self.collection(index).and_then(|rows| rows.get(position))
    }
}
