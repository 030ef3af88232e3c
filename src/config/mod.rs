/*!
Configuration of a search.

All configuration for a [SearchLoop](crate::search::SearchLoop) is contained
within a single [Config], the way `otter_sat::config::Config` is the single
place every tunable of a CDCL solve is collected.
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

mod widget_order;
pub use widget_order::WidgetOrder;

mod symbol_order;
pub use symbol_order::SymbolOrderPolicy;

/// Identifies a SAT backend to delegate grounded rounds to.
///
/// Today there is exactly one bundled backend. The type stays an enum (rather
/// than a free-form string identifier, as spec §6 suggests) because a single
/// valid value has no use for stringly-typed selection; see `DESIGN.md`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SatBackend {
    /// The bundled, non-incremental DPLL backend (see [crate::solver::builtin]).
    #[default]
    BuiltinDpll,
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The initial domain size `n` to try.
    pub start_size: ConfigOption<u32>,

    /// If true, `start_size` is overridden by the number of constants in the
    /// sorted signature once it is known.
    pub use_constants_as_start: bool,

    /// Scales the canonicity window `w` of spec §4.4.6. `0.0` emits no
    /// canonicity clauses at all (spec §8, boundary behaviour 9).
    pub symmetry_ratio: ConfigOption<f64>,

    /// The grounded-term enumeration policy (spec §4.3).
    pub widget_order: WidgetOrder,

    /// The symbol-sort policy (spec §4.3).
    pub symbol_order: SymbolOrderPolicy,

    /// Which SAT backend to delegate rounds to.
    pub sat_backend: SatBackend,

    /// Emit the optional "use model size" cap of spec §4.4.7 when every
    /// function has arity <= 1.
    pub use_model_size_cap: bool,

    /// The wall-clock budget for the whole search. `Duration::ZERO` means "no limit".
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    /// The default configuration favours a small, deterministic search: start
    /// at size 1, grow the domain by symmetry breaking alone, no time limit.
    fn default() -> Self {
        Config {
            start_size: ConfigOption {
                name: "start_size",
                min: 1,
                max: u32::MAX,
                value: 1,
            },

            use_constants_as_start: false,

            symmetry_ratio: ConfigOption {
                name: "symmetry_ratio",
                min: 0.0,
                max: 1.0,
                value: 1.0,
            },

            widget_order: WidgetOrder::default(),

            symbol_order: SymbolOrderPolicy::default(),

            sat_backend: SatBackend::default(),

            use_model_size_cap: false,

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}
