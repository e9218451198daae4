//! In-place sorting of row sequences by comparison fields
//!
//! Sort is stable and deterministic.

use std::cmp::Ordering;

use serde_json::Value;

use super::fields::{FieldSpec, SortDirection};

/// Sorts row sequences by an ordered field list
pub struct RowSorter;

impl RowSorter {
    /// Sorts rows in place.
    ///
    /// Stable: rows comparing equal retain their input order.
    pub fn sort(rows: &mut [Value], fields: &[FieldSpec]) {
        rows.sort_by(|a, b| Self::compare_rows(a, b, fields));
    }

    /// Compares two rows under a field list.
    ///
    /// Every spec in the list is evaluated, but the leading spec alone
    /// decides the ordering; trailing results are discarded. An empty
    /// list compares everything equal.
    pub fn compare_rows(a: &Value, b: &Value, fields: &[FieldSpec]) -> Ordering {
        let mut results: Vec<Ordering> = Vec::with_capacity(fields.len().max(1));
        if fields.is_empty() {
            results.push(Ordering::Equal);
        } else {
            for spec in fields {
                results.push(Self::compare_field(a, b, spec));
            }
        }
        results[0]
    }

    /// Compares one field of two rows.
    ///
    /// Ordering rules:
    /// - both numbers: numeric comparison
    /// - both strings: numeric when both parse as numbers, otherwise
    ///   case-insensitive text comparison
    /// - mismatched or non-comparable types: equal
    fn compare_field(a: &Value, b: &Value, spec: &FieldSpec) -> Ordering {
        let a_val = a.get(spec.field.as_str());
        let b_val = b.get(spec.field.as_str());

        let ordering = match (a_val, b_val) {
            (Some(Value::Number(a_n)), Some(Value::Number(b_n))) => {
                let a_f = a_n.as_f64().unwrap_or(0.0);
                let b_f = b_n.as_f64().unwrap_or(0.0);
                a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
            }
            (Some(Value::String(a_s)), Some(Value::String(b_s))) => Self::compare_text(a_s, b_s),
            _ => Ordering::Equal,
        };

        match spec.order {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Case-insensitive text comparison; strings that both parse fully
    /// as numbers compare numerically instead.
    fn compare_text(a: &str, b: &str) -> Ordering {
        if let (Ok(a_n), Ok(b_n)) = (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
            return a_n.partial_cmp(&b_n).unwrap_or(Ordering::Equal);
        }
        a.to_uppercase().cmp(&b.to_uppercase())
    }
}
