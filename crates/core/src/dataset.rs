//! The loaded dataset: lifter results plus meet metadata.

use crate::row::{Row, RowIndex};
use crate::table::{MeetTable, OplTable};

/// Both tables of a loaded dataset.
///
/// The loader builds this once; query code only borrows it.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    opl: OplTable,
    meets: MeetTable,
}

impl Dataset {
    /// Creates a dataset from its two tables.
    pub fn new(opl: OplTable, meets: MeetTable) -> Self {
        Self { opl, meets }
    }

    /// Returns the lifter results table.
    #[inline]
    pub fn opl(&self) -> &OplTable {
        &self.opl
    }

    /// Returns the meet metadata table.
    #[inline]
    pub fn meets(&self) -> &MeetTable {
        &self.meets
    }

    /// Returns a lifter row by position.
    #[inline]
    pub fn entry(&self, index: RowIndex) -> Option<&Row> {
        self.opl.get(index)
    }

    /// Returns a meet row by position.
    #[inline]
    pub fn meet(&self, index: RowIndex) -> Option<&Row> {
        self.meets.get(index)
    }
}
