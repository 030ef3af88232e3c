//! The three grounded-term enumeration policies of spec §4.3.

/// Controls the order in which `(symbol, domain index)` grounded terms are
/// enumerated for a sort, which in turn controls which term is selected as
/// the `n`-th canonical term for symmetry breaking (spec §4.4.5, §4.4.6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WidgetOrder {
    /// For each function `f`, then each `m in 1..n`, emit `(f, m)`.
    #[default]
    FunctionFirst,

    /// For each `m in 1..n`, then each function `f`, emit `(f, m)`.
    ArgumentFirst,

    /// For each `m`, then each function `f` at index `i`, emit `(f, 1 + ((m + i) mod n))`.
    Diagonal,
}
