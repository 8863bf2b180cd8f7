//! opldb Core - Cell values, rows and immutable tables for the opldb dataset.
//!
//! This crate provides the foundational types the query layer works over:
//!
//! - `Value`: a cell (`Null`, number, or text) with numeric coercion
//! - `Row`: an ordered sequence of cells, identified by its position
//! - `schema`: the closed column layouts `OplColumn` and `MeetColumn`
//! - `Table`: an immutable, width-checked sequence of rows
//! - `Dataset`: the lifter table plus the meet table
//! - `Error`: construction-time errors
//!
//! # Example
//!
//! ```rust
//! use opldb_core::schema::{ColumnSet, MeetColumn};
//! use opldb_core::{MeetTable, Row};
//!
//! let row: Row = ["0", "rps/1901", "RPS", "2019-01-12", "USA", "NY", "Albany", "Winter Classic"]
//!     .into_iter()
//!     .collect();
//! let meets = MeetTable::new(vec![row]).unwrap();
//!
//! assert_eq!(meets.len(), 1);
//! assert_eq!(meets.get(0).unwrap().text(MeetColumn::Federation), Some("RPS"));
//! assert_eq!(MeetColumn::from_name("MeetName").unwrap(), MeetColumn::MeetName);
//! ```

#![no_std]

extern crate alloc;

mod dataset;
mod error;
mod row;
pub mod schema;
mod table;
mod value;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use row::{Row, RowIndex};
pub use table::{MeetTable, OplTable, Table};
pub use value::Value;
