/*!
The SearchLoop (spec §4.5): drives the domain size `n` upward, resetting
the SAT backend each round, until a model is found, a refutation bound is
reached, or resources run out.
*/

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::config::{Config, SatBackend};
use crate::encoder;
use crate::misc::log::targets;
use crate::model;
use crate::reports::Outcome;
use crate::signature::{self, Signature};
use crate::solver::builtin::DpllBridge;
use crate::solver::{SolveResult, SolverBridge};
use crate::sort::{self, distinctness_witness_size};
use crate::symbol_order::order_symbols;
use crate::types::err::ErrorKind;

pub struct SearchLoop;

impl SearchLoop {
    /// Run the whole search to completion (spec §4.5).
    pub fn run(signature: &Signature, config: &Config) -> Outcome {
        Self::run_with(signature, config, |_, _| {})
    }

    /// Run the whole search to completion, invoking `on_round(n, &Encoded)`
    /// after each round is encoded but before it is solved — used by the CLI
    /// to write optional DIMACS snapshots (spec §6, "Persistent state").
    pub fn run_with(
        signature: &Signature,
        config: &Config,
        mut on_round: impl FnMut(u32, &encoder::Encoded),
    ) -> Outcome {
        let prepared = match signature::prepare(signature) {
            Ok(p) => p,
            Err(ErrorKind::PreparationRefutation(clause)) => return Outcome::Refutation(clause),
            Err(_) => return Outcome::Unknown,
        };

        let sorted = sort::infer(signature);
        let mut symbol_order = order_symbols(signature, &sorted, config.symbol_order);

        let max_model_size = derive_max_model_size(signature);
        debug!(target: targets::SEARCH, "maxModelSize = {max_model_size:?}");

        let mut n = if config.use_constants_as_start {
            (signature.constants().count() as u32).max(1)
        } else {
            config.start_size.value
        };

        let deadline = if config.time_limit.value == Duration::ZERO {
            None
        } else {
            Some(Instant::now() + config.time_limit.value)
        };

        loop {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return Outcome::TimeLimit;
                }
            }

            trace!(target: targets::SEARCH, "round n={n}");

            let encoded = match encoder::encode(
                signature,
                &prepared,
                &sorted,
                &mut symbol_order,
                config,
                n,
                max_model_size,
            ) {
                Ok(e) => e,
                Err(_) => return Outcome::Unknown,
            };

            on_round(n, &encoded);

            let mut solver = match config.sat_backend {
                SatBackend::BuiltinDpll => DpllBridge::default(),
            };
            solver.ensure_var_count(encoded.layout.total_vars);
            for clause in encoded.all_clauses() {
                solver.add_clause(clause);
            }

            match solver.solve() {
                SolveResult::Satisfiable => {
                    let model = model::extract(signature, &encoded.layout, &solver, n);
                    return Outcome::Satisfiable(model);
                }
                SolveResult::Unsatisfiable => {
                    if let Some(max) = max_model_size {
                        if n >= max {
                            return Outcome::Refutation(Vec::new());
                        }
                    }
                    n += 1;
                }
                SolveResult::Unknown => return Outcome::Unknown,
            }
        }
    }
}

/// Derive the initial `maxModelSize` upper bound (spec §4.5).
fn derive_max_model_size(signature: &Signature) -> Option<u32> {
    let mut max: Option<u32> = None;

    for clause in &signature.clauses {
        if let Some(k) = distinctness_witness_size(clause) {
            max = Some(max.map_or(k, |m| m.min(k)));
        }
    }

    // Only tighten using the constant count when there is at least one
    // constant to bound against (mirroring the sort-bound rule in
    // `sort::infer`): with zero constants, "no Skolem functions" says
    // nothing about how many domain elements are actually needed, and
    // collapsing the bound to 0 would force an immediate refutation before
    // the search ever tries n=1.
    let no_skolem_functions = signature.is_epr() || signature.functions.iter().all(|s| s.arity == 0);
    let constants = signature.constants().count() as u32;
    if no_skolem_functions && constants > 0 {
        max = Some(max.map_or(constants, |m| m.min(constants)));
    }

    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{PredicateId, RawLiteral, SymbolInfo, VarId};

    #[test]
    fn constant_free_epr_has_no_max_model_size() {
        let mut sig = Signature::default();
        sig.predicates.push(SymbolInfo { name: "p".into(), arity: 1 });
        let p = PredicateId(0);
        sig.clauses.push(vec![RawLiteral::Pred {
            predicate: p,
            args: vec![VarId(0)],
            polarity: true,
        }]);
        sig.clauses.push(vec![RawLiteral::Pred {
            predicate: p,
            args: vec![VarId(0)],
            polarity: false,
        }]);

        // No constants anywhere: the bound must stay unset, not collapse to
        // 0 and force an immediate refutation before n=1 is ever tried.
        assert_eq!(derive_max_model_size(&sig), None);
    }
}
