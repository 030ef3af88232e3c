//! Totality axioms (spec §4.4.4): every input tuple has at least one image.

use crate::encoder::layout::Layout;
use crate::generic::mixed_radix::next_tuple;
use crate::signature::{FunctionId, Signature};
use crate::solver::Lit;
use crate::sort::SortedSignature;

pub fn totality_clauses(signature: &Signature, sorted: &SortedSignature, layout: &Layout) -> Vec<Vec<Lit>> {
    let n = layout.n;
    let mut out = Vec::new();

    for (fi, sym) in signature.functions.iter().enumerate() {
        let f = FunctionId(fi as u32);
        let fbounds = sorted.function_bounds(f);
        let range_bound = fbounds[0].map_or(n, |b| b.min(n));
        if range_bound == 0 {
            continue;
        }

        let arg_bounds: Vec<u32> = fbounds[1..].iter().map(|b| b.map_or(n, |b| b.min(n))).collect();
        if sym.arity > 0 && arg_bounds.iter().any(|&b| b == 0) {
            continue;
        }

        let mut d = vec![1u32; sym.arity as usize];
        loop {
            let clause: Vec<Lit> = (1..=range_bound)
                .map(|e| {
                    let mut tuple = d.clone();
                    tuple.push(e);
                    layout.function_var(f, &tuple)
                })
                .collect();
            out.push(clause);
            if sym.arity == 0 || !next_tuple(&mut d, &arg_bounds) {
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SymbolInfo;
    use crate::sort;

    #[test]
    fn emits_one_clause_per_tuple() {
        let mut sig = Signature::default();
        sig.functions.push(SymbolInfo { name: "f".into(), arity: 1 });
        let sorted = sort::infer(&sig);
        let layout = Layout::build(&sig, 2).unwrap();
        let clauses = totality_clauses(&sig, &sorted, &layout);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].len(), 2);
    }
}
