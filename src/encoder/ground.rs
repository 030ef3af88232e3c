//! Ground clauses (spec §4.4.1).
//!
//! A clause with zero logical variables can, given the flattening contract
//! (spec §4.1), only consist of nullary-predicate literals: any use of a
//! function (even a constant) or a variable-to-variable equality introduces
//! at least one variable. So emitting a ground clause is just reading off
//! each literal's nullary predicate variable under its original polarity.

use crate::encoder::layout::Layout;
use crate::signature::{RawLiteral, Signature};
use crate::solver::Lit;

/// Translate the ground clauses of `signature` (indices `ground`) into SAT clauses.
pub fn ground_clauses(signature: &Signature, ground: &[usize], layout: &Layout) -> Vec<Vec<Lit>> {
    ground
        .iter()
        .map(|&ci| {
            signature.clauses[ci]
                .iter()
                .map(|literal| match literal {
                    RawLiteral::Pred {
                        predicate,
                        args,
                        polarity,
                    } => {
                        debug_assert!(args.is_empty(), "a ground clause literal must be nullary");
                        let var = layout.predicate_var(*predicate, &[]);
                        if *polarity {
                            var
                        } else {
                            -var
                        }
                    }
                    _ => unreachable!("a ground clause cannot contain a VarEq or DefEq literal"),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{PredicateId, SymbolInfo};

    #[test]
    fn emits_nullary_predicate_literals() {
        let mut sig = Signature::default();
        sig.predicates.push(SymbolInfo { name: "p".into(), arity: 0 });
        sig.predicates.push(SymbolInfo { name: "q".into(), arity: 0 });
        let p = PredicateId(0);
        let q = PredicateId(1);
        sig.clauses.push(vec![
            RawLiteral::Pred { predicate: p, args: vec![], polarity: true },
            RawLiteral::Pred { predicate: q, args: vec![], polarity: true },
        ]);
        sig.clauses.push(vec![RawLiteral::Pred { predicate: p, args: vec![], polarity: false }]);

        let layout = Layout::build(&sig, 1).unwrap();
        let clauses = ground_clauses(&sig, &[0, 1], &layout);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].len(), 2);
        assert_eq!(clauses[1], vec![-clauses[0][0]]);
    }
}
