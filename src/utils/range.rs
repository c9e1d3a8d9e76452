//! Ordered index sequences used by the expansion builder.

/// Ascending column set `{0, …, n-1}`.
pub fn columns(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// `set \ {c}`, preserving the order of the remaining entries.
pub fn without(set: &[usize], c: usize) -> Vec<usize> {
    set.iter().copied().filter(|&k| k != c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_ascending() {
        assert_eq!(columns(0), Vec::<usize>::new());
        assert_eq!(columns(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn without_keeps_order() {
        assert_eq!(without(&[0, 2, 3, 5], 3), vec![0, 2, 5]);
        assert_eq!(without(&[1, 4], 7), vec![1, 4]);
    }
}
