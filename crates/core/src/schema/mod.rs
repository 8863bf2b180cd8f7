//! Table layouts for opldb.

mod column;

pub use column::{ColumnSet, MeetColumn, OplColumn};
