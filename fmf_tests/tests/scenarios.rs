//! End-to-end scenarios, one per named example in the specification's
//! worked-examples table, plus a handful of the documented boundary
//! behaviours around `maxModelSize` and `symmetryRatio`.

use fmf::config::Config;
use fmf::reports::Outcome;
use fmf::signature::{FunctionId, PredicateId};
use fmf::search::SearchLoop;

#[test]
fn pure_propositional() {
    let signature = fmf::input::parse("p q\n~p\n").unwrap();
    let outcome = SearchLoop::run(&signature, &Config::default());
    match outcome {
        Outcome::Satisfiable(model) => {
            assert_eq!(model.size, 1);
            assert_eq!(model.predicates[&PredicateId(0)][&Vec::new()], false);
            assert_eq!(model.predicates[&PredicateId(1)][&Vec::new()], true);
        }
        other => panic!("expected a model, got {other:?}"),
    }
}

#[test]
fn equality_refutation() {
    let signature = fmf::input::parse("a=b\nb=c\na!=c\n").unwrap();
    let outcome = SearchLoop::run(&signature, &Config::default());
    assert!(matches!(outcome, Outcome::Refutation(_)), "expected a refutation, got {outcome:?}");
}

#[test]
fn function_graph() {
    let signature = fmf::input::parse("f(a)=a\n").unwrap();
    let outcome = SearchLoop::run(&signature, &Config::default());
    match outcome {
        Outcome::Satisfiable(model) => {
            assert_eq!(model.size, 1);
            assert_eq!(model.constants[&FunctionId(0)], 1);
            assert_eq!(model.functions[&FunctionId(1)][&vec![1]], 1);
        }
        other => panic!("expected a model, got {other:?}"),
    }
}

#[test]
fn pairwise_distinct() {
    let signature = fmf::input::parse("X1!=X2 X1!=X3 X2!=X3\n").unwrap();
    let outcome = SearchLoop::run(&signature, &Config::default());
    match outcome {
        Outcome::Satisfiable(model) => assert_eq!(model.size, 2),
        other => panic!("expected a model, got {other:?}"),
    }
}

#[test]
fn forced_cycle() {
    let signature = fmf::input::parse("f(f(X))=X\nf(a)!=a\n").unwrap();
    let outcome = SearchLoop::run(&signature, &Config::default());
    match outcome {
        Outcome::Satisfiable(model) => assert_eq!(model.size, 2),
        other => panic!("expected a model, got {other:?}"),
    }
}

#[test]
fn epr_unsat() {
    let signature = fmf::input::parse("p(a)\n~p(X)\n").unwrap();
    let outcome = SearchLoop::run(&signature, &Config::default());
    assert!(matches!(outcome, Outcome::Refutation(_)), "expected a refutation, got {outcome:?}");
}

/// Property 5 (spec §8): a ground clause with only nullary predicates
/// contributes exactly one propositional clause, regardless of `n`.
#[test]
fn ground_clauses_are_size_independent() {
    let signature = fmf::input::parse("p q\n~p\n").unwrap();
    let prepared = fmf::signature::prepare(&signature).unwrap();
    assert_eq!(prepared.ground.len(), 2);
    assert_eq!(prepared.non_ground.len(), 0);
}

/// Property 9 (spec §8): `symmetryRatio = 0.0` must not change the
/// satisfiability verdict, only the search's willingness to break symmetry.
#[test]
fn symmetry_ratio_zero_still_finds_a_model() {
    let signature = fmf::input::parse("f(f(X))=X\nf(a)!=a\n").unwrap();
    let mut config = Config::default();
    config.symmetry_ratio.value = 0.0;
    let outcome = SearchLoop::run(&signature, &config);
    assert!(matches!(outcome, Outcome::Satisfiable(_)), "expected a model, got {outcome:?}");
}

/// Boundary behaviour: `n = 1` is attempted before any larger size.
#[test]
fn smallest_domain_is_tried_first() {
    let signature = fmf::input::parse("p q\n~p\n").unwrap();
    let outcome = SearchLoop::run(&signature, &Config::default());
    match outcome {
        Outcome::Satisfiable(model) => assert_eq!(model.size, 1),
        other => panic!("expected a model, got {other:?}"),
    }
}
