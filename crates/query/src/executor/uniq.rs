//! First-occurrence deduplication.
//!
//! The input order decides which occurrence survives, so callers sort by their
//! ranking first and dedup second.

use alloc::vec::Vec;
use hashbrown::HashSet;
use opldb_core::schema::{ColumnSet, OplColumn};
use opldb_core::{RowIndex, Table, Value};

/// Keeps only the first index seen for each distinct value of `column`.
///
/// Indices that do not address a row of `table` are dropped.
pub fn uniq_by<C: ColumnSet>(table: &Table<C>, indices: &[RowIndex], column: C) -> Vec<RowIndex> {
    let mut seen: HashSet<&Value> = HashSet::with_capacity(indices.len());
    let out: Vec<RowIndex> = indices
        .iter()
        .copied()
        .filter(|&i| match table.get(i) {
            Some(row) => {
                let fresh = seen.insert(row.cell(column));
                if cfg!(feature = "debug-log") && !fresh {
                    log::trace!("uniq {}: dropping row {}", C::TABLE_NAME, i);
                }
                fresh
            }
            None => false,
        })
        .collect();
    log::trace!(
        "uniq {} by {}: {} -> {} indices",
        C::TABLE_NAME,
        column.name(),
        indices.len(),
        out.len()
    );
    out
}

/// Keeps each lifter's first entry, by Name.
#[inline]
pub fn uniq_by_name(table: &Table<OplColumn>, indices: &[RowIndex]) -> Vec<RowIndex> {
    uniq_by(table, indices, OplColumn::Name)
}
