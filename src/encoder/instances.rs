//! Clause instances (spec §4.4.2): grounding each non-ground clause over
//! every assignment of its logical variables within their sort bounds.

use crate::encoder::layout::Layout;
use crate::generic::mixed_radix::next_tuple;
use crate::signature::{RawLiteral, Signature};
use crate::solver::Lit;
use crate::sort::SortedSignature;

/// Translate the non-ground clauses of `signature` (indices `non_ground`) into
/// SAT clauses at domain size `n`.
pub fn clause_instances(
    signature: &Signature,
    non_ground: &[usize],
    sorted: &SortedSignature,
    layout: &Layout,
) -> Vec<Vec<Lit>> {
    let n = layout.n;
    let mut out = Vec::new();

    for &ci in non_ground {
        let clause = &signature.clauses[ci];
        let bounds: Vec<u32> = sorted
            .clause_var_bounds(ci)
            .into_iter()
            .map(|b| b.map_or(n, |b| b.min(n)))
            .collect();

        if bounds.is_empty() || bounds.iter().any(|&b| b == 0) {
            continue;
        }

        let mut g = vec![1u32; bounds.len()];
        loop {
            if let Some(sat_clause) = instantiate(clause, &g) {
                out.push(dedup(sat_clause, layout));
            }
            if !next_tuple(&mut g, &bounds) {
                break;
            }
        }
    }

    out
}

fn instantiate(clause: &[RawLiteral], g: &[u32]) -> Option<Vec<GroundLiteral>> {
    let mut literals = Vec::with_capacity(clause.len());
    for literal in clause {
        match literal {
            RawLiteral::VarEq { x, y, polarity } => {
                let equal = g[x.0 as usize] == g[y.0 as usize];
                let trivially_true = equal == *polarity;
                if trivially_true {
                    return None;
                }
                // trivially false: omit the literal, keep the rest of the instance
            }
            RawLiteral::DefEq {
                function,
                args,
                image,
                polarity,
            } => {
                let mut tuple: Vec<u32> = args.iter().map(|v| g[v.0 as usize]).collect();
                tuple.push(g[image.0 as usize]);
                literals.push(GroundLiteral::Function(*function, tuple, *polarity));
            }
            RawLiteral::Pred {
                predicate,
                args,
                polarity,
            } => {
                let tuple: Vec<u32> = args.iter().map(|v| g[v.0 as usize]).collect();
                literals.push(GroundLiteral::Predicate(*predicate, tuple, *polarity));
            }
        }
    }
    Some(literals)
}

enum GroundLiteral {
    Function(crate::signature::FunctionId, Vec<u32>, bool),
    Predicate(crate::signature::PredicateId, Vec<u32>, bool),
}

fn dedup(literals: Vec<GroundLiteral>, layout: &Layout) -> Vec<Lit> {
    let mut lits: Vec<Lit> = literals
        .into_iter()
        .map(|l| match l {
            GroundLiteral::Function(f, tuple, polarity) => {
                let var = layout.function_var(f, &tuple);
                if polarity {
                    var
                } else {
                    -var
                }
            }
            GroundLiteral::Predicate(p, tuple, polarity) => {
                let var = layout.predicate_var(p, &tuple);
                if polarity {
                    var
                } else {
                    -var
                }
            }
        })
        .collect();
    lits.sort_unstable();
    lits.dedup();
    lits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{PredicateId, SymbolInfo, VarId};
    use crate::sort;

    #[test]
    fn skips_trivially_true_instances() {
        let mut sig = Signature::default();
        sig.clauses.push(vec![RawLiteral::VarEq {
            x: VarId(0),
            y: VarId(0),
            polarity: true,
        }]);
        let sorted = sort::infer(&sig);
        let layout = Layout::build(&sig, 2).unwrap();
        let instances = clause_instances(&sig, &[0], &sorted, &layout);
        assert!(instances.is_empty());
    }

    #[test]
    fn grounds_a_unary_predicate_clause() {
        let mut sig = Signature::default();
        sig.predicates.push(SymbolInfo { name: "p".into(), arity: 1 });
        let p = PredicateId(0);
        sig.clauses.push(vec![RawLiteral::Pred {
            predicate: p,
            args: vec![VarId(0)],
            polarity: true,
        }]);
        let sorted = sort::infer(&sig);
        let layout = Layout::build(&sig, 2).unwrap();
        let instances = clause_instances(&sig, &[0], &sorted, &layout);
        assert_eq!(instances.len(), 2);
    }
}
