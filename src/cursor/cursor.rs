//! The comparison cursor session object

use std::cmp::Ordering;

use serde_json::Value;

use crate::errors::{CompareError, CompareResult};
use crate::observability::Logger;
use crate::sort::{FieldSpec, RowSorter};
use crate::validate::RowValidator;

use super::detail::{DetailMode, DetailSet};

/// A master-detail comparison session.
///
/// Owns the master and detail data. Unless the pre-sorted flag is set,
/// `compare` lazily sorts the owned sequences in place by the configured
/// field lists, which the raw-data getters observe.
#[derive(Debug)]
pub struct ComparisonCursor {
    master: Vec<Value>,
    details: DetailSet,
    master_fields: Vec<FieldSpec>,
    detail_fields: Vec<FieldSpec>,
    detail_fields_per_collection: Vec<Vec<FieldSpec>>,
    sorted: bool,
    master_position: usize,
    detail_positions: Vec<usize>,
    active_detail: usize,
}

impl ComparisonCursor {
    /// Opens a comparison session over master and detail data.
    ///
    /// Detail mode is detected from the data: multiple iff the detail
    /// array is non-empty and its first element is itself an array.
    ///
    /// # Errors
    ///
    /// - `MissingInput` if either argument is JSON null
    /// - `InvalidShape` if master is not an array of objects, or detail
    ///   is neither an array of objects nor an array of arrays of objects
    pub fn new(master: Value, details: Value) -> CompareResult<Self> {
        Self::open(master, details).map_err(|err| {
            Logger::error("CURSOR_REJECTED", &[("code", err.code())]);
            err
        })
    }

    fn open(master: Value, details: Value) -> CompareResult<Self> {
        let master = Self::require_array(master, "master")?;
        let detail_elements = Self::require_array(details, "details")?;

        let mode = RowValidator::verify_rows(&master, &detail_elements)?;
        let details = DetailSet::from_elements(detail_elements, mode);

        let master_rows = master.len().to_string();
        let collections = details.collection_count().to_string();
        Logger::trace(
            "CURSOR_OPEN",
            &[
                ("collections", collections.as_str()),
                ("master_rows", master_rows.as_str()),
                ("mode", mode.as_str()),
            ],
        );

        let detail_positions = vec![0; details.collection_count()];
        Ok(Self {
            master,
            details,
            master_fields: Vec::new(),
            detail_fields: Vec::new(),
            detail_fields_per_collection: Vec::new(),
            sorted: false,
            master_position: 0,
            detail_positions,
            active_detail: 0,
        })
    }

    fn require_array(data: Value, side: &'static str) -> CompareResult<Vec<Value>> {
        match data {
            Value::Null => Err(CompareError::missing_input(side)),
            Value::Array(elements) => Ok(elements),
            _ => Err(CompareError::invalid_shape(side)),
        }
    }

    // ==================
    // Session State
    // ==================

    /// Row under the master cursor, or `None` past the end
    pub fn current_row(&self) -> Option<&Value> {
        self.master.get(self.master_position)
    }

    /// Row under the detail cursor last operated on, or `None` past
    /// that collection's end
    pub fn detail_row(&self) -> Option<&Value> {
        self.details
            .row(self.active_detail, self.detail_positions[self.active_detail])
    }

    /// True once the master position has passed the last row
    pub fn master_eof(&self) -> bool {
        self.master_position >= self.master.len()
    }

    /// The master data, in its current (possibly re-sorted) order
    pub fn master(&self) -> &[Value] {
        &self.master
    }

    /// The detail data, in its current (possibly re-sorted) order
    pub fn details(&self) -> &DetailSet {
        &self.details
    }

    /// Detected detail mode
    pub fn mode(&self) -> DetailMode {
        self.details.mode()
    }

    /// Current master position
    pub fn master_position(&self) -> usize {
        self.master_position
    }

    /// Current position of the detail cursor for `index`, if that
    /// collection exists
    pub fn detail_position(&self, index: usize) -> Option<usize> {
        self.detail_positions.get(index).copied()
    }

    /// Whether the session treats its data as already sorted
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Marks the data as already sorted by the configured field lists,
    /// skipping the lazy sort step. The caller asserts actual
    /// sortedness; a wrong assertion gives incorrect compare results.
    pub fn set_sorted(&mut self, sorted: bool) {
        self.sorted = sorted;
    }

    /// Master comparison field list
    pub fn master_fields(&self) -> &[FieldSpec] {
        &self.master_fields
    }

    pub fn set_master_fields(&mut self, fields: Vec<FieldSpec>) {
        self.master_fields = fields;
    }

    /// Detail comparison field list (single mode)
    pub fn detail_fields(&self) -> &[FieldSpec] {
        &self.detail_fields
    }

    pub fn set_detail_fields(&mut self, fields: Vec<FieldSpec>) {
        self.detail_fields = fields;
    }

    /// Per-collection detail field lists (multiple mode)
    pub fn detail_fields_per_collection(&self) -> &[Vec<FieldSpec>] {
        &self.detail_fields_per_collection
    }

    pub fn set_detail_fields_per_collection(&mut self, fields: Vec<Vec<FieldSpec>>) {
        self.detail_fields_per_collection = fields;
    }

    // ==================
    // Cursor Movement
    // ==================

    /// Moves the master cursor forward one row.
    ///
    /// Advancing past the end is allowed; the current row reads as
    /// `None` and `master_eof` reports true.
    pub fn master_advance(&mut self) {
        self.master_position += 1;
    }

    /// Moves the first detail cursor forward one row
    pub fn detail_advance(&mut self) {
        self.step_detail(0);
    }

    /// Moves the detail cursor for `index` forward one row.
    ///
    /// # Errors
    ///
    /// `DetailIndexOutOfRange` if no such collection exists.
    pub fn detail_advance_at(&mut self, index: usize) -> CompareResult<()> {
        let count = self.details.collection_count();
        if index >= count {
            return Err(CompareError::detail_index_out_of_range(index, count));
        }
        self.step_detail(index);
        Ok(())
    }

    fn step_detail(&mut self, index: usize) {
        self.detail_positions[index] += 1;
        self.active_detail = index;
    }

    // ==================
    // Comparison
    // ==================

    /// Compares the rows under the master cursor and the first detail
    /// cursor. See [`ComparisonCursor::compare_at`].
    pub fn compare(&mut self) -> CompareResult<bool> {
        self.compare_at(0)
    }

    /// Compares the row under the master cursor against the detail
    /// collection for `index`, advancing that detail cursor past rows
    /// that sort strictly ahead of the current master row.
    ///
    /// Returns `Ok(true)` on a composite-key match at the current
    /// positions. Exhaustion of either side is a clean `Ok(false)`,
    /// never an error; the caller is expected to advance the master
    /// cursor and retry on `Ok(false)`.
    ///
    /// # Errors
    ///
    /// - `DetailIndexOutOfRange` if no such collection exists
    /// - `FieldCountMismatch` / `OrderMismatch` if the paired field
    ///   lists disagree in length or direction
    pub fn compare_at(&mut self, index: usize) -> CompareResult<bool> {
        let count = self.details.collection_count();
        if index >= count {
            return Err(CompareError::detail_index_out_of_range(index, count));
        }
        self.active_detail = index;

        // Advance-and-retry loop, bounded by the collection length.
        loop {
            let detail_len = self
                .details
                .collection(index)
                .map(|rows| rows.len())
                .unwrap_or(0);
            if self.detail_positions[index] >= detail_len {
                return Ok(false);
            }
            if self.master_position >= self.master.len() {
                return Ok(false);
            }

            if !self.sorted {
                self.apply_sort(index);
            }

            let master_row = &self.master[self.master_position];
            let detail_row = match self.details.row(index, self.detail_positions[index]) {
                Some(row) => row,
                None => return Ok(false),
            };

            let outcome = Self::composite_compare(
                master_row,
                detail_row,
                &self.master_fields,
                self.detail_fields_for(index),
            )?;

            if outcome > 0 {
                self.detail_positions[index] += 1;
                continue;
            }
            return Ok(outcome == 0);
        }
    }

    /// Re-establishes order on the master and the addressed detail
    /// collection. Idempotent.
    fn apply_sort(&mut self, index: usize) {
        RowSorter::sort(&mut self.master, &self.master_fields);
        match &mut self.details {
            DetailSet::Single(rows) => RowSorter::sort(rows, &self.detail_fields),
            DetailSet::Multiple(collections) => {
                if let Some(rows) = collections.get_mut(index) {
                    let fields = self
                        .detail_fields_per_collection
                        .get(index)
                        .map(Vec::as_slice)
                        .unwrap_or(&[]);
                    RowSorter::sort(rows, fields);
                }
            }
        }

        let collection = index.to_string();
        Logger::trace("CURSOR_SORT", &[("collection", collection.as_str())]);
    }

    /// The field list paired with the addressed detail collection
    fn detail_fields_for(&self, index: usize) -> &[FieldSpec] {
        match self.details {
            DetailSet::Single(_) => &self.detail_fields,
            DetailSet::Multiple(_) => self
                .detail_fields_per_collection
                .get(index)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }

    /// Runs the composite comparison over the paired field lists.
    ///
    /// Returns 1 when the detail row sorts strictly ahead of the master
    /// row under the configured order (the detail cursor must catch up),
    /// -1 for the opposite, 0 for a match. The last field in the list
    /// decides the result: the loop does not short-circuit, and each
    /// field's contribution overwrites the previous one. Empty lists
    /// compare as a match.
    fn composite_compare(
        master_row: &Value,
        detail_row: &Value,
        master_fields: &[FieldSpec],
        detail_fields: &[FieldSpec],
    ) -> CompareResult<i8> {
        RowValidator::verify_fields(master_fields, detail_fields)?;

        let mut outcome: i8 = 0;
        for (master_spec, detail_spec) in master_fields.iter().zip(detail_fields) {
            let master_value = master_row.get(master_spec.field.as_str());
            let detail_value = detail_row.get(detail_spec.field.as_str());

            if master_value == detail_value {
                outcome = 0;
                continue;
            }

            let ascending = master_spec.order.is_ascending();
            outcome = match Self::order_values(master_value, detail_value) {
                Ordering::Greater => {
                    if ascending {
                        1
                    } else {
                        -1
                    }
                }
                Ordering::Less => {
                    if ascending {
                        -1
                    } else {
                        1
                    }
                }
                Ordering::Equal => 0,
            };
        }
        Ok(outcome)
    }

    /// Total ordering over field values: absent < present, then by type
    /// rank (null < bool < number < string < array < object), then
    /// natural ordering within the type. Same-type arrays and objects
    /// order as equal.
    fn order_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        let (a_val, b_val) = match (a, b) {
            (Some(a_val), Some(b_val)) => (a_val, b_val),
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        };

        match (a_val, b_val) {
            (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
            (Value::Number(l), Value::Number(r)) => {
                let l = l.as_f64().unwrap_or(0.0);
                let r = r.as_f64().unwrap_or(0.0);
                l.partial_cmp(&r).unwrap_or(Ordering::Equal)
            }
            (Value::String(l), Value::String(r)) => l.cmp(r),
            _ => Self::type_rank(a_val).cmp(&Self::type_rank(b_val)),
        }
    }

    fn type_rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }
}
