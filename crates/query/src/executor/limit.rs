//! Limit executor.

use alloc::vec::Vec;
use opldb_core::RowIndex;

/// Keeps at most `limit` indices after skipping the first `offset`.
pub fn limit(mut indices: Vec<RowIndex>, offset: usize, limit: usize) -> Vec<RowIndex> {
    let len = indices.len();
    let start = offset.min(len);
    let end = offset.saturating_add(limit).min(len);

    // Truncate tail first (drops elements after end)
    indices.truncate(end);
    // Remove head elements (drops elements before start)
    if start > 0 {
        indices.drain(..start);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_limit() {
        let indices: Vec<RowIndex> = (0..10).collect();
        assert_eq!(limit(indices, 2, 3), vec![2, 3, 4]);
    }

    #[test]
    fn test_limit_past_end() {
        assert_eq!(limit(vec![5, 6, 7], 2, 10), vec![7]);
        assert!(limit(vec![5, 6, 7], 5, 1).is_empty());
    }

    #[test]
    fn test_limit_unbounded() {
        assert_eq!(limit(vec![1, 2], 0, usize::MAX), vec![1, 2]);
    }
}
