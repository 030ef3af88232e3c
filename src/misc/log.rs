/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when diagnosing an unexpected
search outcome or tuning the symmetry-breaking knobs.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [sort inference](crate::sort)
    pub const SORT: &str = "sort";

    /// Logs related to [symbol ordering](crate::symbol_order)
    pub const SYMBOL_ORDER: &str = "symbol_order";

    /// Logs related to [encoding](crate::encoder) a round
    pub const ENCODE: &str = "encode";

    /// Logs related to the propositional [variable layout](crate::encoder::layout)
    pub const LAYOUT: &str = "layout";

    /// Logs related to [symmetry breaking](crate::encoder::symmetry)
    pub const SYMMETRY: &str = "symmetry";

    /// Logs related to the outer [search loop](crate::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [model extraction](crate::model)
    pub const EXTRACT: &str = "extract";
}
