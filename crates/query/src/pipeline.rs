//! Chained index queries.
//!
//! `IndexQuery` threads one index sequence through the executor functions, so a
//! rankings page reads as a single expression:
//!
//! ```rust
//! use opldb_core::schema::{ColumnSet, OplColumn};
//! use opldb_core::{OplTable, Row, Value};
//! use opldb_query::{ColumnEquals, IndexQuery, Order};
//!
//! let lifter = |name: &str, sex: &str, wilks: &str| {
//!     let mut cells = vec![Value::Null; OplColumn::width()];
//!     cells[OplColumn::Name.index()] = name.into();
//!     cells[OplColumn::Sex.index()] = sex.into();
//!     cells[OplColumn::Wilks.index()] = wilks.into();
//!     Row::new(cells)
//! };
//! let opl = OplTable::new(vec![
//!     lifter("A", "F", "410.2"),
//!     lifter("B", "M", "500.0"),
//!     lifter("A", "F", "433.9"),
//! ])
//! .unwrap();
//!
//! let top = IndexQuery::new(&opl)
//!     .filter(ColumnEquals::new(OplColumn::Sex, "F"))
//!     .sort_numeric(OplColumn::Wilks, Order::Desc)
//!     .uniq_by_name()
//!     .limit(0, 100)
//!     .into_indices();
//! assert_eq!(top, vec![2]);
//! ```

use crate::comparator::{Order, RowComparator};
use crate::executor;
use crate::predicate::RowPredicate;
use alloc::vec::Vec;
use opldb_core::schema::{ColumnSet, OplColumn};
use opldb_core::{Row, RowIndex, Table};

/// An index sequence bound to the table it addresses.
#[derive(Clone, Debug)]
pub struct IndexQuery<'a, C: ColumnSet> {
    table: &'a Table<C>,
    indices: Vec<RowIndex>,
}

impl<'a, C: ColumnSet> IndexQuery<'a, C> {
    /// Starts from every row of `table`, in storage order.
    pub fn new(table: &'a Table<C>) -> Self {
        Self {
            table,
            indices: executor::make_indices(table),
        }
    }

    /// Starts from an existing index sequence.
    pub fn from_indices(table: &'a Table<C>, indices: Vec<RowIndex>) -> Self {
        Self { table, indices }
    }

    /// Keeps rows satisfying `predicate`.
    pub fn filter<P: RowPredicate>(mut self, predicate: P) -> Self {
        self.indices = executor::filter(self.table, &self.indices, predicate);
        self
    }

    /// Sorts by one numeric column.
    pub fn sort_numeric(mut self, column: C, order: Order) -> Self {
        self.indices = executor::sort_numeric(self.table, self.indices, column, order);
        self
    }

    /// Sorts by two numeric columns sharing one direction.
    pub fn sort_numeric_by2(mut self, primary: C, secondary: C, order: Order) -> Self {
        self.indices =
            executor::sort_numeric_by2(self.table, self.indices, primary, secondary, order);
        self
    }

    /// Sorts with an arbitrary row comparator.
    pub fn sort_by<R: RowComparator>(mut self, comparator: R) -> Self {
        executor::sort_by_comparator(self.table, &mut self.indices, &comparator);
        self
    }

    /// Keeps the first index per distinct value of `column`.
    pub fn uniq_by(mut self, column: C) -> Self {
        self.indices = executor::uniq_by(self.table, &self.indices, column);
        self
    }

    /// Skips `offset` indices and keeps at most `count`.
    pub fn limit(mut self, offset: usize, count: usize) -> Self {
        self.indices = executor::limit(self.indices, offset, count);
        self
    }

    /// Returns the current index sequence.
    #[inline]
    pub fn indices(&self) -> &[RowIndex] {
        &self.indices
    }

    /// Consumes the query, returning its index sequence.
    #[inline]
    pub fn into_indices(self) -> Vec<RowIndex> {
        self.indices
    }

    /// Iterates the selected rows in sequence order.
    pub fn rows(&self) -> impl Iterator<Item = (RowIndex, &'a Row)> + '_ {
        let table = self.table;
        self.indices
            .iter()
            .filter_map(move |&i| table.get(i).map(|row| (i, row)))
    }

    /// Returns the number of selected indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no index is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<'a> IndexQuery<'a, OplColumn> {
    /// Keeps each lifter's first entry, by Name.
    pub fn uniq_by_name(self) -> Self {
        self.uniq_by(OplColumn::Name)
    }
}
