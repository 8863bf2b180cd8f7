//! Index sequence operators.
//!
//! Each operator takes an index sequence (plus the table it addresses) and
//! returns a new or reordered one. None of them touch table storage.

mod filter;
mod limit;
mod scan;
mod sort;
mod uniq;

pub use filter::filter;
pub use limit::limit;
pub use scan::make_indices;
pub use sort::{sort_by_comparator, sort_numeric, sort_numeric_by2};
pub use uniq::{uniq_by, uniq_by_name};
