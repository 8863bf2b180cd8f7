//! Index sequence construction.

use alloc::vec::Vec;
use opldb_core::schema::ColumnSet;
use opldb_core::{RowIndex, Table};

/// Builds the identity index sequence `[0, table.len())`.
pub fn make_indices<C: ColumnSet>(table: &Table<C>) -> Vec<RowIndex> {
    let indices: Vec<RowIndex> = (0..table.len()).collect();
    log::trace!("scan {}: {} indices", C::TABLE_NAME, indices.len());
    indices
}
