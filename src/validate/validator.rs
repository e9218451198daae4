//! Shape and field validation for comparison inputs

use serde_json::Value;

use crate::cursor::DetailMode;
use crate::errors::{CompareError, CompareResult};
use crate::sort::FieldSpec;

/// Validates comparison inputs before a session touches them.
///
/// Validation is deterministic and does not mutate its inputs.
pub struct RowValidator;

impl RowValidator {
    /// Checks master/detail shapes and detects the detail mode.
    ///
    /// Multiple mode iff `details` is non-empty and its first element is
    /// an array; every element must then be an array of objects. Single
    /// mode otherwise; every element must be an object.
    ///
    /// # Errors
    ///
    /// `InvalidShape` naming the offending side.
    pub fn verify_rows(master: &[Value], details: &[Value]) -> CompareResult<DetailMode> {
        if !Self::all_records(master) {
            return Err(CompareError::invalid_shape("master"));
        }

        let multiple = details.first().map(Value::is_array).unwrap_or(false);
        if multiple {
            for collection in details {
                let rows = collection
                    .as_array()
                    .ok_or(CompareError::invalid_shape("details"))?;
                if !Self::all_records(rows) {
                    return Err(CompareError::invalid_shape("details"));
                }
            }
            Ok(DetailMode::Multiple)
        } else {
            if !Self::all_records(details) {
                return Err(CompareError::invalid_shape("details"));
            }
            Ok(DetailMode::Single)
        }
    }

    /// Checks that paired field lists agree in length and direction.
    ///
    /// # Errors
    ///
    /// - `FieldCountMismatch` when the lists differ in length
    /// - `OrderMismatch` naming both fields at the first position whose
    ///   directions disagree
    pub fn verify_fields(
        master_fields: &[FieldSpec],
        detail_fields: &[FieldSpec],
    ) -> CompareResult<()> {
        if master_fields.len() != detail_fields.len() {
            return Err(CompareError::FieldCountMismatch {
                master: master_fields.len(),
                detail: detail_fields.len(),
            });
        }

        for (master_spec, detail_spec) in master_fields.iter().zip(detail_fields) {
            if master_spec.order != detail_spec.order {
                return Err(CompareError::order_mismatch(
                    &master_spec.field,
                    &detail_spec.field,
                ));
            }
        }
        Ok(())
    }

    fn all_records(rows: &[Value]) -> bool {
        rows.iter().all(Value::is_object)
    }
}
