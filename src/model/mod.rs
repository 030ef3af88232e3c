/*!
The ModelExtractor (spec §4.6): reads a satisfying propositional assignment
back into a human-readable first-order interpretation.
*/

use std::collections::BTreeMap;
use std::fmt;

use log::trace;

use crate::encoder::Layout;
use crate::generic::mixed_radix::next_tuple;
use crate::misc::log::targets;
use crate::signature::{FunctionId, PredicateId, Signature};
use crate::solver::SolverBridge;

/// A finite interpretation over the domain `1..=size`.
///
/// Function entries may be partial (spec §9, "Open question — partial
/// functions under sort bounds"): a tuple with no recorded image simply has
/// no entry, rather than an invented default.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub size: u32,
    pub constants: BTreeMap<FunctionId, u32>,
    pub functions: BTreeMap<FunctionId, BTreeMap<Vec<u32>, u32>>,
    pub predicates: BTreeMap<PredicateId, BTreeMap<Vec<u32>, bool>>,
}

/// Read the interpretation out of `solver`'s last satisfying assignment at domain size `n`.
pub fn extract(signature: &Signature, layout: &Layout, solver: &dyn SolverBridge, n: u32) -> Model {
    trace!(target: targets::EXTRACT, "extracting model at n={n}");

    let mut constants = BTreeMap::new();
    let mut functions = BTreeMap::new();

    for (fi, sym) in signature.functions.iter().enumerate() {
        let f = FunctionId(fi as u32);
        if sym.arity == 0 {
            if let Some(e) = find_image(layout, solver, f, &[], n) {
                constants.insert(f, e);
            }
            continue;
        }

        let mut table = BTreeMap::new();
        let bounds = vec![n; sym.arity as usize];
        let mut tuple = vec![1u32; sym.arity as usize];
        loop {
            if let Some(e) = find_image(layout, solver, f, &tuple, n) {
                table.insert(tuple.clone(), e);
            }
            if !next_tuple(&mut tuple, &bounds) {
                break;
            }
        }
        functions.insert(f, table);
    }

    let mut predicates = BTreeMap::new();
    for (pi, sym) in signature.predicates.iter().enumerate() {
        let p = PredicateId(pi as u32);
        let mut table = BTreeMap::new();
        if sym.arity == 0 {
            table.insert(Vec::new(), solver.value_of(layout.predicate_var(p, &[])));
        } else {
            let bounds = vec![n; sym.arity as usize];
            let mut tuple = vec![1u32; sym.arity as usize];
            loop {
                let value = solver.value_of(layout.predicate_var(p, &tuple));
                table.insert(tuple.clone(), value);
                if !next_tuple(&mut tuple, &bounds) {
                    break;
                }
            }
        }
        predicates.insert(p, table);
    }

    Model {
        size: n,
        constants,
        functions,
        predicates,
    }
}

fn find_image(layout: &Layout, solver: &dyn SolverBridge, f: FunctionId, args: &[u32], n: u32) -> Option<u32> {
    (1..=n).find(|&e| {
        let mut tuple = args.to_vec();
        tuple.push(e);
        solver.value_of(layout.function_var(f, &tuple))
    })
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "domain: 1..={}", self.size)?;
        for (c, e) in &self.constants {
            writeln!(f, "  c{} = {e}", c.0)?;
        }
        for (fun, table) in &self.functions {
            for (args, image) in table {
                let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                writeln!(f, "  f{}({}) = {image}", fun.0, args.join(", "))?;
            }
        }
        for (p, table) in &self.predicates {
            for (args, value) in table {
                if *value {
                    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                    writeln!(f, "  p{}({})", p.0, args.join(", "))?;
                }
            }
        }
        Ok(())
    }
}
