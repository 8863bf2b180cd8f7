//! Sort executor.
//!
//! All sorts here are stable: rows whose keys compare equal keep their input
//! order. The numeric sorters decorate each index with its coerced key(s) once
//! instead of re-parsing cells on every comparison.

use crate::comparator::{Order, RowComparator};
use alloc::vec::Vec;
use core::cmp::Ordering;
use opldb_core::schema::ColumnSet;
use opldb_core::{RowIndex, Table};

#[inline]
fn key_of<C: ColumnSet>(table: &Table<C>, index: RowIndex, column: C, order: Order) -> f64 {
    match table.get(index) {
        Some(row) => order.key(row, column),
        None => order.extreme(),
    }
}

/// Sorts `indices` by the numeric value of `column`.
///
/// Cells that are not numeric sort last in either direction.
pub fn sort_numeric<C: ColumnSet>(
    table: &Table<C>,
    mut indices: Vec<RowIndex>,
    column: C,
    order: Order,
) -> Vec<RowIndex> {
    let mut keyed: Vec<(f64, RowIndex)> = indices
        .iter()
        .map(|&i| (key_of(table, i, column, order), i))
        .collect();
    keyed.sort_by(|a, b| order.compare(a.0, b.0));

    for (slot, (_, i)) in indices.iter_mut().zip(keyed) {
        *slot = i;
    }
    log::trace!(
        "sort {} by {} {:?}: {} indices",
        C::TABLE_NAME,
        column.name(),
        order,
        indices.len()
    );
    indices
}

/// Sorts `indices` by `primary`, breaking exact ties with `secondary`.
///
/// Both keys use the same direction. Rows missing the primary value compare
/// equal on it and are therefore ordered by `secondary` among themselves.
pub fn sort_numeric_by2<C: ColumnSet>(
    table: &Table<C>,
    mut indices: Vec<RowIndex>,
    primary: C,
    secondary: C,
    order: Order,
) -> Vec<RowIndex> {
    let mut keyed: Vec<(f64, f64, RowIndex)> = indices
        .iter()
        .map(|&i| {
            (
                key_of(table, i, primary, order),
                key_of(table, i, secondary, order),
                i,
            )
        })
        .collect();
    keyed.sort_by(|a, b| match order.compare(a.0, b.0) {
        Ordering::Equal => order.compare(a.1, b.1),
        ord => ord,
    });

    for (slot, (_, _, i)) in indices.iter_mut().zip(keyed) {
        *slot = i;
    }
    log::trace!(
        "sort {} by {}, {} {:?}: {} indices",
        C::TABLE_NAME,
        primary.name(),
        secondary.name(),
        order,
        indices.len()
    );
    indices
}

/// Sorts `indices` in place with an arbitrary row comparator.
///
/// Indices that do not address a row sort after all that do.
pub fn sort_by_comparator<C, R>(table: &Table<C>, indices: &mut [RowIndex], comparator: &R)
where
    C: ColumnSet,
    R: RowComparator + ?Sized,
{
    indices.sort_by(|&a, &b| match (table.get(a), table.get(b)) {
        (Some(ra), Some(rb)) => comparator.compare(ra, rb),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    });
}
