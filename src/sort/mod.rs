/*!
Sort inference (spec §4.2): a lightweight static analysis partitioning
argument positions into inferred sorts and computing per-argument domain
bounds, enabling soundness of the encoding under sort restriction and a
reduction in the number of SAT variables.

Violations of the invariants this module establishes (every symbol position
and clause variable ends up with exactly one sort) are programming errors,
not user-visible conditions (spec §7), and are checked with `debug_assert!`
rather than carried in a `Result`.
*/

mod dsu;
use dsu::Dsu;

use std::collections::HashMap;

use crate::signature::{FunctionId, PredicateId, RawLiteral, Signature, VarId};

/// An inferred sort: an equivalence class over argument positions that must
/// share a domain in any model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortId(pub u32);

/// Per-sort data: its constants, its range-here functions, and a cardinality
/// bound (`None` means unbounded, i.e. effectively the current model size).
#[derive(Clone, Debug, Default)]
pub struct SortInfo {
    /// Nullary function symbols of this sort, in occurrence order.
    pub constants: Vec<FunctionId>,

    /// Non-nullary function symbols whose range is this sort, in occurrence order.
    pub functions: Vec<FunctionId>,

    /// An upper bound on the cardinality of this sort, if known.
    pub bound: Option<u32>,
}

/// The sorted signature produced by [infer].
#[derive(Clone, Debug, Default)]
pub struct SortedSignature {
    /// Indexed by `SortId.0`.
    pub sorts: Vec<SortInfo>,

    /// `function_sort[f][0]` is the range sort; `function_sort[f][1 + i]` is the sort of argument `i`.
    pub function_sort: Vec<Vec<SortId>>,

    /// `predicate_sort[p][i]` is the sort of argument `i`.
    pub predicate_sort: Vec<Vec<SortId>>,

    /// `clause_var_sort[c]` is `None` for ground clauses, else a vector giving
    /// the sort of each dense variable `0..k` of clause `c`.
    pub clause_var_sort: Vec<Option<Vec<SortId>>>,
}

impl SortedSignature {
    pub fn sort_bound(&self, s: SortId) -> Option<u32> {
        self.sorts[s.0 as usize].bound
    }

    /// `fbounds[f][0..=arity]`: the range bound followed by each argument bound.
    pub fn function_bounds(&self, f: FunctionId) -> Vec<Option<u32>> {
        self.function_sort[f.0 as usize]
            .iter()
            .map(|s| self.sort_bound(*s))
            .collect()
    }

    /// `pbounds[p][0..arity)`: the bound of each argument.
    pub fn predicate_bounds(&self, p: PredicateId) -> Vec<Option<u32>> {
        self.predicate_sort[p.0 as usize]
            .iter()
            .map(|s| self.sort_bound(*s))
            .collect()
    }

    /// `cbounds[C][v]`: the bound of each logical variable of (non-ground) clause `c`.
    pub fn clause_var_bounds(&self, c: usize) -> Vec<Option<u32>> {
        match &self.clause_var_sort[c] {
            None => Vec::new(),
            Some(sorts) => sorts.iter().map(|s| self.sort_bound(*s)).collect(),
        }
    }
}

/// A position in the global symbol-position space, unioned by occurrence in
/// `f(x̄) = y` / `p(x̄)` literals (spec §4.2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Position {
    FunctionRange(FunctionId),
    FunctionArg(FunctionId, u32),
    PredicateArg(PredicateId, u32),
}

/// Infer sorts and bounds for `signature`.
pub fn infer(signature: &Signature) -> SortedSignature {
    // 1. Enumerate the global (function/predicate position) key space.
    let mut position_index: HashMap<Position, usize> = HashMap::new();
    let mut next = 0usize;
    for (fi, sym) in signature.functions.iter().enumerate() {
        let f = FunctionId(fi as u32);
        position_index.insert(Position::FunctionRange(f), next);
        next += 1;
        for i in 0..sym.arity {
            position_index.insert(Position::FunctionArg(f, i), next);
            next += 1;
        }
    }
    for (pi, sym) in signature.predicates.iter().enumerate() {
        let p = PredicateId(pi as u32);
        for i in 0..sym.arity {
            position_index.insert(Position::PredicateArg(p, i), next);
            next += 1;
        }
    }
    let position_count = next;

    // 2. Reserve a contiguous block of indices per clause for its dense
    //    logical variables (0..k), found by scanning each clause once.
    let mut clause_var_offset = vec![0usize; signature.clauses.len()];
    let mut clause_var_count = vec![0u32; signature.clauses.len()];
    for (ci, clause) in signature.clauses.iter().enumerate() {
        let max_var = clause
            .iter()
            .flat_map(|l| l.vars())
            .map(|v| v.0)
            .max();
        let count = max_var.map(|m| m + 1).unwrap_or(0);
        clause_var_count[ci] = count;
        clause_var_offset[ci] = next;
        next += count as usize;
    }
    let total = next;

    let var_index = |c: usize, v: VarId| -> usize { clause_var_offset[c] + v.0 as usize };

    // 3. Union positions and clause variables per spec §4.2's unification rules.
    let mut dsu = Dsu::new(total);
    for (ci, clause) in signature.clauses.iter().enumerate() {
        for literal in clause {
            match literal {
                RawLiteral::VarEq { x, y, .. } => {
                    dsu.union(var_index(ci, *x), var_index(ci, *y));
                }
                RawLiteral::DefEq {
                    function,
                    args,
                    image,
                    ..
                } => {
                    let range_pos = position_index[&Position::FunctionRange(*function)];
                    dsu.union(var_index(ci, *image), range_pos);
                    for (i, arg) in args.iter().enumerate() {
                        let arg_pos = position_index[&Position::FunctionArg(*function, i as u32)];
                        dsu.union(var_index(ci, *arg), arg_pos);
                    }
                }
                RawLiteral::Pred {
                    predicate, args, ..
                } => {
                    for (i, arg) in args.iter().enumerate() {
                        let arg_pos =
                            position_index[&Position::PredicateArg(*predicate, i as u32)];
                        dsu.union(var_index(ci, *arg), arg_pos);
                    }
                }
            }
        }
    }

    // 4. Assign a dense SortId to each distinct root reachable from a global
    //    position, in position-enumeration order, so sort ids are stable
    //    across runs of the same signature.
    let mut root_to_sort: HashMap<usize, SortId> = HashMap::new();
    let mut sorts: Vec<SortInfo> = Vec::new();
    for idx in 0..position_count {
        let root = dsu.find(idx);
        root_to_sort.entry(root).or_insert_with(|| {
            let id = SortId(sorts.len() as u32);
            sorts.push(SortInfo::default());
            id
        });
    }

    // A variable island never unified with any symbol position still needs a
    // sort (e.g. a clause purely of VarEq literals, spec E4): it gets its own
    // fresh, unbounded sort the first time it is seen.
    let mut sort_of = |dsu: &mut Dsu, root_to_sort: &mut HashMap<usize, SortId>, sorts: &mut Vec<SortInfo>, idx: usize| -> SortId {
        let root = dsu.find(idx);
        *root_to_sort.entry(root).or_insert_with(|| {
            let id = SortId(sorts.len() as u32);
            sorts.push(SortInfo::default());
            id
        })
    };

    // 5. Populate constants/functions per sort from the range position of each symbol.
    for (fi, sym) in signature.functions.iter().enumerate() {
        let f = FunctionId(fi as u32);
        let range_pos = position_index[&Position::FunctionRange(f)];
        let s = sort_of(&mut dsu, &mut root_to_sort, &mut sorts, range_pos);
        if sym.arity == 0 {
            sorts[s.0 as usize].constants.push(f);
        } else {
            sorts[s.0 as usize].functions.push(f);
        }
    }

    // 6. function_sort / predicate_sort tables.
    let function_sort: Vec<Vec<SortId>> = signature
        .functions
        .iter()
        .enumerate()
        .map(|(fi, sym)| {
            let f = FunctionId(fi as u32);
            let mut row = vec![sort_of(
                &mut dsu,
                &mut root_to_sort,
                &mut sorts,
                position_index[&Position::FunctionRange(f)],
            )];
            for i in 0..sym.arity {
                row.push(sort_of(
                    &mut dsu,
                    &mut root_to_sort,
                    &mut sorts,
                    position_index[&Position::FunctionArg(f, i)],
                ));
            }
            row
        })
        .collect();

    let predicate_sort: Vec<Vec<SortId>> = signature
        .predicates
        .iter()
        .enumerate()
        .map(|(pi, sym)| {
            let p = PredicateId(pi as u32);
            (0..sym.arity)
                .map(|i| {
                    sort_of(
                        &mut dsu,
                        &mut root_to_sort,
                        &mut sorts,
                        position_index[&Position::PredicateArg(p, i)],
                    )
                })
                .collect()
        })
        .collect();

    // 7. clause_var_sort table.
    let clause_var_sort: Vec<Option<Vec<SortId>>> = signature
        .clauses
        .iter()
        .enumerate()
        .map(|(ci, _)| {
            let k = clause_var_count[ci];
            if k == 0 {
                None
            } else {
                Some(
                    (0..k)
                        .map(|v| {
                            sort_of(
                                &mut dsu,
                                &mut root_to_sort,
                                &mut sorts,
                                var_index(ci, VarId(v)),
                            )
                        })
                        .collect(),
                )
            }
        })
        .collect();

    // 8. Cardinality bounds: a sort whose only way to acquire elements is
    //    through its named constants (no non-constant function ranges into
    //    it) is bounded above by its constant count. A sort with any
    //    range-here function, or with no constants at all, stays unbounded
    //    (spec §4.2, §4.5): a constant-free, function-free sort still gets
    //    its elements from the domain `1..=n` directly (e.g. a sort that
    //    only ever appears in variable/predicate-argument position), so
    //    bounding it to `0` would make every clause over it vacuously
    //    grounded away instead of checked at every `n`.
    for sort in sorts.iter_mut() {
        if sort.functions.is_empty() && !sort.constants.is_empty() {
            sort.bound = Some(sort.constants.len() as u32);
        }
    }

    // 9. Refine bounds using the pairwise-distinctness witness of spec §4.2:
    //    a clause whose every literal is a two-variable equality forces its
    //    k variables' sort to have cardinality at most k (spec E4).
    for (ci, clause) in signature.clauses.iter().enumerate() {
        if let Some(k) = distinctness_witness_size(clause) {
            if let Some(var_sorts) = &clause_var_sort[ci] {
                if let Some(&s) = var_sorts.first() {
                    let entry = &mut sorts[s.0 as usize].bound;
                    *entry = Some(entry.map_or(k, |b| b.min(k)));
                }
            }
        }
    }

    debug_assert_eq!(function_sort.len(), signature.functions.len());
    debug_assert_eq!(predicate_sort.len(), signature.predicates.len());

    SortedSignature {
        sorts,
        function_sort,
        predicate_sort,
        clause_var_sort,
    }
}

/// If `clause` consists entirely of [RawLiteral::VarEq] literals, return the
/// number of distinct variables it mentions (spec §4.2, §4.5, §8 scenario E4).
pub fn distinctness_witness_size(clause: &[RawLiteral]) -> Option<u32> {
    if clause.is_empty() || !clause.iter().all(|l| matches!(l, RawLiteral::VarEq { .. })) {
        return None;
    }
    let mut vars: Vec<u32> = clause.iter().flat_map(|l| l.vars()).map(|v| v.0).collect();
    vars.sort_unstable();
    vars.dedup();
    Some(vars.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SymbolInfo;

    fn function_clause(name: &str, arity: u32) -> FunctionId {
        let _ = (name, arity);
        FunctionId(0)
    }

    #[test]
    fn constants_bound_a_closed_sort() {
        let mut sig = Signature::default();
        sig.functions.push(SymbolInfo {
            name: "a".into(),
            arity: 0,
        });
        sig.functions.push(SymbolInfo {
            name: "b".into(),
            arity: 0,
        });
        let a = FunctionId(0);
        let b = FunctionId(1);
        sig.clauses.push(vec![RawLiteral::DefEq {
            function: a,
            args: vec![],
            image: VarId(0),
            polarity: true,
        }]);
        sig.clauses.push(vec![RawLiteral::DefEq {
            function: b,
            args: vec![],
            image: VarId(0),
            polarity: true,
        }]);

        let sorted = infer(&sig);
        // both constants land in the same sort (unified via the shared range position)
        let s = sorted.function_sort[0][0];
        assert_eq!(sorted.sort_bound(s), Some(2));
        let _ = function_clause;
    }

    #[test]
    fn distinctness_clause_tightens_bound() {
        let mut sig = Signature::default();
        sig.clauses.push(vec![
            RawLiteral::VarEq {
                x: VarId(0),
                y: VarId(1),
                polarity: false,
            },
            RawLiteral::VarEq {
                x: VarId(0),
                y: VarId(2),
                polarity: false,
            },
            RawLiteral::VarEq {
                x: VarId(1),
                y: VarId(2),
                polarity: false,
            },
        ]);

        let sorted = infer(&sig);
        let s = sorted.clause_var_sort[0].as_ref().unwrap()[0];
        assert_eq!(sorted.sort_bound(s), Some(3));
    }

    #[test]
    fn constant_free_sort_is_unbounded() {
        let mut sig = Signature::default();
        sig.predicates.push(SymbolInfo {
            name: "p".into(),
            arity: 1,
        });
        let p = crate::signature::PredicateId(0);
        sig.clauses.push(vec![RawLiteral::Pred {
            predicate: p,
            args: vec![VarId(0)],
            polarity: true,
        }]);

        let sorted = infer(&sig);
        let s = sorted.clause_var_sort[0].as_ref().unwrap()[0];
        // No constants and no functions range into this sort: it must stay
        // unbounded, not collapse to a bound of 0 (which would make every
        // clause instance over it vacuously drop out of the encoding).
        assert_eq!(sorted.sort_bound(s), None);
    }
}
