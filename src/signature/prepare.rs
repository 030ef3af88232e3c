//! The ClausePreparer external contract (spec §4.1).
//!
//! Flattening and general clause splitting happen upstream of this crate
//! (spec §1, Out of scope); what lands here is already flat. Preparation's
//! job is therefore limited to: partitioning the clause set into ground and
//! non-ground clauses, checking for an outright empty clause, and recording
//! which symbols (if any) were eliminated upstream by definition
//! introduction — a feature this crate does not perform itself, so the sets
//! are always empty today, but the type exists so [crate::model] has a
//! stable place to re-apply eliminated-symbol definitions if a future
//! front end performs that elimination.

use std::collections::HashSet;

use super::{FunctionId, PredicateId, Signature};
use crate::types::err::ErrorKind;

/// The result of preparing a [Signature]'s clause set.
#[derive(Clone, Debug, Default)]
pub struct Prepared {
    /// Indices into `clauses` with zero variables.
    pub ground: Vec<usize>,

    /// Indices into `clauses` with one or more variables.
    pub non_ground: Vec<usize>,

    /// Function symbols eliminated upstream (always empty in this crate; see module docs).
    pub eliminated_functions: HashSet<FunctionId>,

    /// Predicate symbols eliminated upstream (always empty in this crate; see module docs).
    pub eliminated_predicates: HashSet<PredicateId>,
}

/// Partition `signature.clauses` into ground and non-ground clauses.
///
/// Returns [ErrorKind::PreparationRefutation] if any clause is literally empty
/// (spec §7: "a preprocessed clause is the empty clause").
pub fn prepare(signature: &Signature) -> Result<Prepared, ErrorKind> {
    let mut prepared = Prepared::default();

    for (index, clause) in signature.clauses.iter().enumerate() {
        if clause.is_empty() {
            return Err(ErrorKind::PreparationRefutation(clause.clone()));
        }

        if clause.iter().flat_map(|l| l.vars()).next().is_none() {
            prepared.ground.push(index);
        } else {
            prepared.non_ground.push(index);
        }
    }

    Ok(prepared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{RawLiteral, SymbolInfo, VarId};

    #[test]
    fn splits_ground_from_non_ground() {
        let mut sig = Signature::default();
        sig.predicates.push(SymbolInfo {
            name: "p".into(),
            arity: 1,
        });
        let p = PredicateId(0);

        // Ground: p(x) with x bound to nothing is actually non-ground; a truly
        // ground clause here has to come via a constant-defining equality, but
        // for this unit test we only need the variable/no-variable distinction,
        // so use an empty-args predicate to model a ground atom.
        sig.predicates.push(SymbolInfo {
            name: "q".into(),
            arity: 0,
        });
        let q = PredicateId(1);

        sig.clauses.push(vec![RawLiteral::Pred {
            predicate: q,
            args: vec![],
            polarity: true,
        }]);
        sig.clauses.push(vec![RawLiteral::Pred {
            predicate: p,
            args: vec![VarId(0)],
            polarity: true,
        }]);

        let prepared = prepare(&sig).unwrap();
        assert_eq!(prepared.ground, vec![0]);
        assert_eq!(prepared.non_ground, vec![1]);
    }

    #[test]
    fn empty_clause_is_a_refutation() {
        let mut sig = Signature::default();
        sig.clauses.push(vec![]);
        assert!(matches!(
            prepare(&sig),
            Err(ErrorKind::PreparationRefutation(_))
        ));
    }
}
