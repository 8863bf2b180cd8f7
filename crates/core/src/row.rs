//! Row structure for opldb.
//!
//! A row has no identifier of its own: its identity is its position in the
//! owning [`Table`](crate::Table), expressed as a [`RowIndex`].

use crate::schema::ColumnSet;
use crate::value::Value;
use alloc::vec::Vec;

/// Position of a row within its table.
pub type RowIndex = usize;

static NULL: Value = Value::Null;

/// A row of cells, indexed by column position.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Creates a new row from its cell values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Returns a reference to the values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Gets a value at the given column position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Gets the cell for a typed column, or `Null` if the row is too short.
    #[inline]
    pub fn cell<C: ColumnSet>(&self, column: C) -> &Value {
        self.values.get(column.index()).unwrap_or(&NULL)
    }

    /// Gets the text of a typed column if the cell is a string.
    #[inline]
    pub fn text<C: ColumnSet>(&self, column: C) -> Option<&str> {
        self.cell(column).as_str()
    }

    /// Coerces a typed column to a finite number.
    #[inline]
    pub fn number<C: ColumnSet>(&self, column: C) -> Option<f64> {
        self.cell(column).to_number()
    }

    /// Returns the number of values in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: Into<Value>> FromIterator<V> for Row {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
