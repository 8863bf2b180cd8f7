//! Immutable tables for opldb.
//!
//! A `Table` is built once by the loader and then only read. Row identity is
//! position, so nothing here ever reorders or removes rows.

use crate::error::{Error, Result};
use crate::row::{Row, RowIndex};
use crate::schema::{ColumnSet, MeetColumn, OplColumn};
use alloc::vec::Vec;
use core::marker::PhantomData;

/// An immutable table whose rows follow the column layout `C`.
#[derive(Clone, Debug)]
pub struct Table<C: ColumnSet> {
    rows: Vec<Row>,
    layout: PhantomData<C>,
}

/// The lifter results table.
pub type OplTable = Table<OplColumn>;

/// The meet metadata table.
pub type MeetTable = Table<MeetColumn>;

impl<C: ColumnSet> Table<C> {
    /// Builds a table, checking that every row has one cell per column.
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        let width = C::width();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::row_width(C::TABLE_NAME, i, width, row.len()));
        }
        log::debug!("built table {} with {} rows", C::TABLE_NAME, rows.len());
        Ok(Self {
            rows,
            layout: PhantomData,
        })
    }

    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            layout: PhantomData,
        }
    }

    /// Returns the row at `index`.
    #[inline]
    pub fn get(&self, index: RowIndex) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns all rows in storage order.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterates rows together with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (RowIndex, &Row)> {
        self.rows.iter().enumerate()
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<C: ColumnSet> Default for Table<C> {
    fn default() -> Self {
        Self::empty()
    }
}
