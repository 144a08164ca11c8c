/// Error enumerates over all the ways [`Llrb::validate`] can reject a tree.
///
/// None of these are returned by ordinary read or write operations, a
/// missing key is reported through `bool` / `Option` results instead.
///
/// [`Llrb::validate`]: crate::Llrb::validate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Fatal case, root node is not black.
    #[error("root node must be black")]
    DirtyRoot,
    /// Fatal case, breaking one of the two LLRB rules.
    #[error("consecutive red links")]
    ConsecutiveReds,
    /// Fatal case, a right child with red link, tree must lean left.
    #[error("red right link under key:{0}")]
    RightRed(u64),
    /// Fatal case, breaking one of the two LLRB rules. The String
    /// component of this variant can be used for debugging.
    #[error("unbalanced blacks {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order, (key, ancestor key).
    #[error("sort error key:{0} ancestor:{1}")]
    SortError(u64, u64),
    /// Entry count does not match the reachable nodes, (count, reachable).
    #[error("count mismatch n_count:{0} reachable:{1}")]
    CountMismatch(usize, usize),
}

/// Type alias for Result returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
