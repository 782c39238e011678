use crate::error::{Result, TaxiParkError};

/// Refuse to write a table with no rows; `what` names the table in the error.
pub(crate) fn ensure_not_empty<T>(items: &[T], what: &'static str) -> Result<()> {
    match items {
        [] => Err(TaxiParkError::EmptyExport(what)),
        _ => Ok(()),
    }
}
