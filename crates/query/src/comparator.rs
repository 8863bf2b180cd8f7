//! Row comparators for numeric sorting.
//!
//! Cells are coerced with [`Value::to_number`](opldb_core::Value::to_number).
//! Cells that do not coerce are replaced by the extreme for the sort direction
//! (`f64::MAX` ascending, `f64::MIN` descending), which places them after every
//! valid value in both directions.

use core::cmp::Ordering;
use core::str::FromStr;
use opldb_core::schema::ColumnSet;
use opldb_core::{Error, Row};

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Ascending order (smallest first)
    #[default]
    Asc,
    /// Descending order (largest first)
    Desc,
}

impl Order {
    /// Maps a "min first" flag to a direction.
    #[inline]
    pub fn min_first(min_first: bool) -> Self {
        if min_first {
            Order::Asc
        } else {
            Order::Desc
        }
    }

    /// Applies this order to a comparison result.
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }

    /// Value substituted for cells that are not numeric.
    #[inline]
    pub fn extreme(&self) -> f64 {
        match self {
            Order::Asc => f64::MAX,
            Order::Desc => f64::MIN,
        }
    }

    /// Coerces a row's cell to its sort key under this direction.
    #[inline]
    pub fn key<C: ColumnSet>(&self, row: &Row, column: C) -> f64 {
        row.number(column).unwrap_or_else(|| self.extreme())
    }

    /// Compares two sort keys under this direction.
    #[inline]
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        // keys are always finite, so partial_cmp never fails
        self.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal))
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Order::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Order::Desc)
        } else {
            Err(Error::invalid_operation(alloc::format!(
                "unknown sort order: {}",
                s
            )))
        }
    }
}

/// Trait for ordering two rows of a table.
pub trait RowComparator {
    /// Compares two rows according to the comparator's ordering.
    fn compare(&self, a: &Row, b: &Row) -> Ordering;

    /// Breaks ties of this comparator with `next`.
    fn then<N: RowComparator>(self, next: N) -> ThenBy<Self, N>
    where
        Self: Sized,
    {
        ThenBy {
            first: self,
            second: next,
        }
    }
}

impl<F> RowComparator for F
where
    F: Fn(&Row, &Row) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        self(a, b)
    }
}

/// Compares rows by the numeric value of one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericKey<C> {
    column: C,
    order: Order,
}

impl<C: ColumnSet> NumericKey<C> {
    /// Creates a numeric key comparator.
    pub fn new(column: C, order: Order) -> Self {
        Self { column, order }
    }

    /// Creates an ascending comparator.
    pub fn asc(column: C) -> Self {
        Self::new(column, Order::Asc)
    }

    /// Creates a descending comparator.
    pub fn desc(column: C) -> Self {
        Self::new(column, Order::Desc)
    }

    /// Returns the column compared.
    pub fn column(&self) -> C {
        self.column
    }

    /// Returns the order of this comparator.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<C: ColumnSet> RowComparator for NumericKey<C> {
    #[inline]
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        self.order.compare(
            self.order.key(a, self.column),
            self.order.key(b, self.column),
        )
    }
}

/// Orders by `first`, falling back to `second` only on exact ties.
#[derive(Clone, Copy, Debug)]
pub struct ThenBy<A, B> {
    first: A,
    second: B,
}

impl<A: RowComparator, B: RowComparator> RowComparator for ThenBy<A, B> {
    #[inline]
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.second.compare(a, b),
            ord => ord,
        }
    }
}
