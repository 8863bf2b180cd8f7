//! opldb Query - Index-sequence query primitives over opldb tables.
//!
//! Queries never copy or mutate table rows. They pass around sequences of row
//! positions (`Vec<RowIndex>`) and the consumer pulls row data by index at the
//! end:
//!
//! - `executor`: index builder, filter, numeric sorters, uniq, limit
//! - `predicate`: row predicates and their combinators
//! - `comparator`: sort direction, numeric keys and tie-break composition
//! - `resolve`: natural-key lookups into the meet table
//! - `pipeline`: `IndexQuery`, a builder chaining the executors

#![no_std]

extern crate alloc;

pub mod comparator;
pub mod executor;
pub mod pipeline;
pub mod predicate;
pub mod resolve;

pub use comparator::{NumericKey, Order, RowComparator, ThenBy};
pub use executor::{
    filter, limit, make_indices, sort_by_comparator, sort_numeric, sort_numeric_by2, uniq_by,
    uniq_by_name,
};
pub use pipeline::IndexQuery;
pub use predicate::{And, ColumnEquals, Not, NumericRange, Or, RowPredicate};
pub use resolve::{meet_by_key, meet_by_path, meet_of};
