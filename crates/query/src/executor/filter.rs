//! Filter executor.

use crate::predicate::RowPredicate;
use alloc::vec::Vec;
use opldb_core::schema::ColumnSet;
use opldb_core::{RowIndex, Table};

/// Keeps the indices whose rows satisfy `predicate`, in their original order.
///
/// Indices that do not address a row of `table` are dropped.
pub fn filter<C, P>(table: &Table<C>, indices: &[RowIndex], predicate: P) -> Vec<RowIndex>
where
    C: ColumnSet,
    P: RowPredicate,
{
    let out: Vec<RowIndex> = indices
        .iter()
        .copied()
        .filter(|&i| table.get(i).is_some_and(|row| predicate.eval(row)))
        .collect();
    log::trace!(
        "filter {}: {} -> {} indices",
        C::TABLE_NAME,
        indices.len(),
        out.len()
    );
    out
}
