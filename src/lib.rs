/*!
A library for finding finite models of first-order clause sets with equality.

fmf searches for a finite interpretation — a domain of size *n* and concrete
tables for every function and predicate symbol — that satisfies a given set
of clauses. It does this by reducing "is there a model of size exactly *n*?"
to a propositional satisfiability problem, delegating to a SAT backend, and
incrementing *n* until a model is found, an upper bound is reached
(refutation), or resources are exhausted.

fmf does not implement first-order clause flattening, definition
introduction, or term representation; it consumes an already-flat
[Signature](crate::signature::Signature) and treats the SAT solver itself as
an external collaborator through the [SolverBridge](crate::solver::SolverBridge)
interface.

# Orientation

The library is organised around the stages of the data flow:
`Signature -> prepare -> SortInference -> SymbolOrder -> SearchLoop(n)`,
where each round of the loop runs `Encoder(n) -> SolverBridge -> ModelExtractor`.

Useful starting points:
- [search::SearchLoop::run] to drive a whole search to completion.
- [sort::infer] to inspect the sorted signature a problem produces.
- [encoder] to inspect how a single round at a fixed `n` is encoded.
- [config::Config] to see what is tunable.

# Example

```rust
use fmf::config::Config;
use fmf::input;
use fmf::reports::Outcome;
use fmf::search::SearchLoop;

let signature = input::parse("p q\n~p\n").unwrap();
let outcome = SearchLoop::run(&signature, &Config::default());
assert!(matches!(outcome, Outcome::Satisfiable(_)));
```

# Logs

Calls to [log!](log) are made throughout the library at `debug`/`trace`
level to help diagnose an unexpected search outcome. No logging
implementation is bundled; see [misc::log] for the targets used, and the
`cli_logging` feature for how `fmf_cli` wires one up.
*/

#![allow(clippy::too_many_arguments)]

pub mod types;
pub mod config;
pub mod signature;
pub mod sort;
pub mod symbol_order;
pub mod encoder;
pub mod solver;
pub mod model;
pub mod search;
pub mod reports;
pub mod input;
pub mod generic;
pub mod misc;
