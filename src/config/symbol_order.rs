//! The symbol-sort policies of spec §4.3.

/// Controls the order in which symbols of a sort are visited before grounded
/// terms are enumerated over them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SymbolOrderPolicy {
    /// Preserve the order symbols occur in the (prepared) clause set.
    #[default]
    Occurrence,

    /// Sort by descending usage count, counted over the prepared clause set.
    PreprocessedUsage,

    /// Sort by descending usage count, counted live as symbols are consumed.
    ///
    /// Identical to [SymbolOrderPolicy::PreprocessedUsage] for this crate, since
    /// symbol usage is never revised after preparation; kept as a distinct
    /// variant because the configuration surface names it separately (spec §6).
    Usage,
}
