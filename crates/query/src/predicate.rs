//! Row predicates for filtering.
//!
//! Any `Fn(&Row) -> bool` closure is a predicate. The structs below cover the
//! filters the rankings pages build most often and compose with [`And`], [`Or`]
//! and [`Not`].

use opldb_core::schema::ColumnSet;
use opldb_core::{Row, Value};

/// A predicate that can be evaluated against rows.
pub trait RowPredicate {
    /// Evaluates the predicate against a row.
    fn eval(&self, row: &Row) -> bool;

    /// Returns a predicate matching rows that satisfy both.
    fn and<P: RowPredicate>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Returns a predicate matching rows that satisfy either.
    fn or<P: RowPredicate>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Returns the negation of this predicate.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F> RowPredicate for F
where
    F: Fn(&Row) -> bool,
{
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        self(row)
    }
}

/// Matches rows whose cell equals a value exactly.
#[derive(Clone, Debug)]
pub struct ColumnEquals<C> {
    pub column: C,
    pub value: Value,
}

impl<C: ColumnSet> ColumnEquals<C> {
    pub fn new(column: C, value: impl Into<Value>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

impl<C: ColumnSet> RowPredicate for ColumnEquals<C> {
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        row.cell(self.column) == &self.value
    }
}

/// Matches rows whose cell coerces to a number within `[min, max]`.
///
/// Cells that are not numeric never match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange<C> {
    pub column: C,
    pub min: f64,
    pub max: f64,
}

impl<C: ColumnSet> NumericRange<C> {
    pub fn new(column: C, min: f64, max: f64) -> Self {
        Self { column, min, max }
    }

    /// Matches values greater than or equal to `min`.
    pub fn at_least(column: C, min: f64) -> Self {
        Self::new(column, min, f64::INFINITY)
    }

    /// Matches values less than or equal to `max`.
    pub fn at_most(column: C, max: f64) -> Self {
        Self::new(column, f64::NEG_INFINITY, max)
    }
}

impl<C: ColumnSet> RowPredicate for NumericRange<C> {
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        row.number(self.column)
            .is_some_and(|v| v >= self.min && v <= self.max)
    }
}

/// Conjunction of two predicates.
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(pub A, pub B);

impl<A: RowPredicate, B: RowPredicate> RowPredicate for And<A, B> {
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        self.0.eval(row) && self.1.eval(row)
    }
}

/// Disjunction of two predicates.
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(pub A, pub B);

impl<A: RowPredicate, B: RowPredicate> RowPredicate for Or<A, B> {
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        self.0.eval(row) || self.1.eval(row)
    }
}

/// Negation of a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: RowPredicate> RowPredicate for Not<P> {
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        !self.0.eval(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use opldb_core::schema::OplColumn;

    fn lifter(sex: &str, equipment: &str, bodyweight: &str) -> Row {
        let mut cells = vec![Value::Null; OplColumn::width()];
        cells[OplColumn::Sex.index()] = Value::from(sex);
        cells[OplColumn::Equipment.index()] = Value::from(equipment);
        cells[OplColumn::BodyweightKg.index()] = Value::from(bodyweight);
        Row::new(cells)
    }

    #[test]
    fn test_column_equals() {
        let row = lifter("F", "Raw", "63.2");
        assert!(ColumnEquals::new(OplColumn::Sex, "F").eval(&row));
        assert!(!ColumnEquals::new(OplColumn::Sex, "M").eval(&row));
        assert!(!ColumnEquals::new(OplColumn::Sex, "f").eval(&row));
        assert!(ColumnEquals::new(OplColumn::Age, Value::Null).eval(&row));
    }

    #[test]
    fn test_numeric_range() {
        let row = lifter("M", "Wraps", "82.5");
        assert!(NumericRange::new(OplColumn::BodyweightKg, 74.0, 83.0).eval(&row));
        assert!(NumericRange::at_least(OplColumn::BodyweightKg, 82.5).eval(&row));
        assert!(!NumericRange::at_most(OplColumn::BodyweightKg, 82.0).eval(&row));

        let missing = lifter("M", "Wraps", "");
        assert!(!NumericRange::at_least(OplColumn::BodyweightKg, f64::MIN).eval(&missing));
    }

    #[test]
    fn test_combinators() {
        let raw_women = ColumnEquals::new(OplColumn::Sex, "F")
            .and(ColumnEquals::new(OplColumn::Equipment, "Raw"));
        assert!(raw_women.eval(&lifter("F", "Raw", "60")));
        assert!(!raw_women.eval(&lifter("F", "Single-ply", "60")));

        let raw_or_wraps = ColumnEquals::new(OplColumn::Equipment, "Raw")
            .or(ColumnEquals::new(OplColumn::Equipment, "Wraps"));
        assert!(raw_or_wraps.eval(&lifter("M", "Wraps", "90")));
        assert!(!raw_or_wraps.not().eval(&lifter("M", "Wraps", "90")));
    }

    #[test]
    fn test_closure_predicate() {
        let heavy = |row: &Row| row.number(OplColumn::BodyweightKg).is_some_and(|w| w > 120.0);
        assert!(heavy.eval(&lifter("M", "Raw", "140")));
        assert!(!heavy.eval(&lifter("M", "Raw", "90")));
    }
}
