//! Column layouts for the opldb tables.

use crate::error::{Error, Result};
use core::fmt::Debug;

/// A closed set of columns describing the layout of one table.
///
/// Every row of a table whose layout is `C` has exactly `C::ALL.len()` cells,
/// and `column.index()` is the position of that column's cell.
pub trait ColumnSet: Copy + Eq + Debug + 'static {
    /// Table name used in errors and logs.
    const TABLE_NAME: &'static str;

    /// All columns, in storage order.
    const ALL: &'static [Self];

    /// Position of this column's cell within a row.
    fn index(self) -> usize;

    /// Column name as it appears in the compiled dataset.
    fn name(self) -> &'static str;

    /// Number of cells in a row of this layout.
    #[inline]
    fn width() -> usize {
        Self::ALL.len()
    }

    /// Looks a column up by its dataset name (exact match).
    fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::column_not_found(Self::TABLE_NAME, name))
    }
}

/// Columns of the lifter results table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum OplColumn {
    MeetID,
    Name,
    Sex,
    Equipment,
    Age,
    Division,
    BodyweightKg,
    WeightClassKg,
    SquatKg,
    BenchKg,
    DeadliftKg,
    TotalKg,
    Place,
    Wilks,
}

impl ColumnSet for OplColumn {
    const TABLE_NAME: &'static str = "opl";

    const ALL: &'static [Self] = &[
        OplColumn::MeetID,
        OplColumn::Name,
        OplColumn::Sex,
        OplColumn::Equipment,
        OplColumn::Age,
        OplColumn::Division,
        OplColumn::BodyweightKg,
        OplColumn::WeightClassKg,
        OplColumn::SquatKg,
        OplColumn::BenchKg,
        OplColumn::DeadliftKg,
        OplColumn::TotalKg,
        OplColumn::Place,
        OplColumn::Wilks,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            OplColumn::MeetID => "MeetID",
            OplColumn::Name => "Name",
            OplColumn::Sex => "Sex",
            OplColumn::Equipment => "Equipment",
            OplColumn::Age => "Age",
            OplColumn::Division => "Division",
            OplColumn::BodyweightKg => "BodyweightKg",
            OplColumn::WeightClassKg => "WeightClassKg",
            OplColumn::SquatKg => "SquatKg",
            OplColumn::BenchKg => "BenchKg",
            OplColumn::DeadliftKg => "DeadliftKg",
            OplColumn::TotalKg => "TotalKg",
            OplColumn::Place => "Place",
            OplColumn::Wilks => "Wilks",
        }
    }
}

/// Columns of the meet metadata table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum MeetColumn {
    MeetID,
    /// Stable external key, safe to use in URLs.
    MeetPath,
    Federation,
    Date,
    MeetCountry,
    MeetState,
    MeetTown,
    MeetName,
}

impl ColumnSet for MeetColumn {
    const TABLE_NAME: &'static str = "meet";

    const ALL: &'static [Self] = &[
        MeetColumn::MeetID,
        MeetColumn::MeetPath,
        MeetColumn::Federation,
        MeetColumn::Date,
        MeetColumn::MeetCountry,
        MeetColumn::MeetState,
        MeetColumn::MeetTown,
        MeetColumn::MeetName,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            MeetColumn::MeetID => "MeetID",
            MeetColumn::MeetPath => "MeetPath",
            MeetColumn::Federation => "Federation",
            MeetColumn::Date => "Date",
            MeetColumn::MeetCountry => "MeetCountry",
            MeetColumn::MeetState => "MeetState",
            MeetColumn::MeetTown => "MeetTown",
            MeetColumn::MeetName => "MeetName",
        }
    }
}
