//! Functionality axioms (spec §4.4.3): at most one image per input tuple.

use crate::encoder::layout::Layout;
use crate::generic::mixed_radix::next_tuple;
use crate::signature::{FunctionId, Signature};
use crate::solver::Lit;
use crate::sort::SortedSignature;

pub fn functionality_clauses(signature: &Signature, sorted: &SortedSignature, layout: &Layout) -> Vec<Vec<Lit>> {
    let n = layout.n;
    let mut out = Vec::new();

    for (fi, sym) in signature.functions.iter().enumerate() {
        let f = FunctionId(fi as u32);
        let fbounds = sorted.function_bounds(f);
        let range_bound = fbounds[0].map_or(n, |b| b.min(n));
        if range_bound < 2 {
            continue;
        }

        let arg_bounds: Vec<u32> = fbounds[1..].iter().map(|b| b.map_or(n, |b| b.min(n))).collect();
        if sym.arity > 0 && arg_bounds.iter().any(|&b| b == 0) {
            continue;
        }

        let mut d = vec![1u32; sym.arity as usize];
        loop {
            for a in 1..range_bound {
                for b in (a + 1)..=range_bound {
                    let mut tuple_a = d.clone();
                    tuple_a.push(a);
                    let mut tuple_b = d.clone();
                    tuple_b.push(b);
                    let lit_a = layout.function_var(f, &tuple_a);
                    let lit_b = layout.function_var(f, &tuple_b);
                    out.push(vec![-lit_a, -lit_b]);
                }
            }
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
    fn forbids_two_images_for_a_constant() {
        let mut sig = Signature::default();
        sig.functions.push(SymbolInfo { name: "a".into(), arity: 0 });
        let sorted = sort::infer(&sig);
        let layout = Layout::build(&sig, 2).unwrap();
        let clauses = functionality_clauses(&sig, &sorted, &layout);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 2);
    }
}
