//! Symmetry breaking (spec §4.4.5, §4.4.6, §4.4.7): ordered totality,
//! canonicity, and the optional "use model size" cap.

use crate::encoder::layout::Layout;
use crate::signature::{FunctionId, Signature};
use crate::solver::Lit;
use crate::sort::SortedSignature;
use crate::symbol_order::{GroundedTerm, SymbolOrder};

/// The positive literal for "the term denoted by `term` equals `value`".
fn term_value_lit(term: &GroundedTerm, signature: &Signature, layout: &Layout, value: u32) -> Lit {
    let arity = signature.function_arity(term.function);
    let mut tuple = vec![term.index; arity as usize];
    tuple.push(value);
    layout.function_var(term.function, &tuple)
}

/// Ordered-totality axioms (spec §4.4.5): one per sort whose grounded-term
/// list has reached length `n`.
pub fn ordered_totality_clauses(
    signature: &Signature,
    symbol_order: &SymbolOrder,
    layout: &Layout,
) -> Vec<Vec<Lit>> {
    let n = layout.n;
    symbol_order
        .grounded_terms
        .iter()
        .filter_map(|terms| {
            if terms.len() < n as usize {
                return None;
            }
            let term = &terms[n as usize - 1];
            Some((1..=n).map(|i| term_value_lit(term, signature, layout, i)).collect())
        })
        .collect()
}

/// Canonicity axioms (spec §4.4.6): breaks permutation symmetry of the domain
/// by forcing value `n` to only appear once `n-1` already has.
pub fn canonicity_clauses(
    signature: &Signature,
    symbol_order: &SymbolOrder,
    layout: &Layout,
    ratio: f64,
    max_model_size: Option<u32>,
) -> Vec<Vec<Lit>> {
    let n = layout.n;
    if n < 2 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for terms in &symbol_order.grounded_terms {
        let g = terms.len() as u32;
        if g == 0 {
            continue;
        }
        let w = match max_model_size {
            None => g,
            Some(max) => ((ratio * max as f64).ceil() as u32).min(g),
        };

        for i in 1..w {
            // i ranges 1..=w-1, 1-indexed against the spec's G; our `terms` is 0-indexed.
            let term_i = &terms[(i - 1) as usize];
            let mut clause = vec![-term_value_lit(term_i, signature, layout, n)];
            for j in 1..i {
                let term_j = &terms[(j - 1) as usize];
                clause.push(term_value_lit(term_j, signature, layout, n - 1));
            }
            out.push(clause);
        }
    }
    out
}

/// The optional "use model size" cap (spec §4.4.7): only valid when every
/// function has arity <= 1.
pub fn model_size_cap_clause(signature: &Signature, sorted: &SortedSignature, layout: &Layout) -> Option<Vec<Lit>> {
    if !signature.functions.iter().all(|s| s.arity <= 1) {
        return None;
    }
    let n = layout.n;
    let mut clause = Vec::new();
    for (fi, sym) in signature.functions.iter().enumerate() {
        let f = FunctionId(fi as u32);
        let fbounds = sorted.function_bounds(f);
        let range_bound = fbounds[0].map_or(n, |b| b.min(n));
        if range_bound < n {
            continue;
        }
        if sym.arity == 0 {
            clause.push(layout.function_var(f, &[n]));
        } else {
            let arg_bound = fbounds[1].map_or(n, |b| b.min(n));
            for d in 1..=arg_bound {
                clause.push(layout.function_var(f, &[d, n]));
            }
        }
    }
    Some(clause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetOrder;
    use crate::signature::{Signature, SymbolInfo};
    use crate::sort;
    use crate::symbol_order::{order_symbols, rebuild_grounded_terms};

    #[test]
    fn ordered_totality_is_one_clause_per_populated_sort() {
        let mut sig = Signature::default();
        sig.functions.push(SymbolInfo { name: "a".into(), arity: 0 });
        sig.functions.push(SymbolInfo { name: "b".into(), arity: 0 });
        let sorted = sort::infer(&sig);
        let mut order = order_symbols(&sig, &sorted, Default::default());
        rebuild_grounded_terms(&mut order, &sorted, 2, WidgetOrder::default());
        let layout = Layout::build(&sig, 2).unwrap();
        let clauses = ordered_totality_clauses(&sig, &order, &layout);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 2);
    }

    #[test]
    fn ratio_zero_emits_no_canonicity_clauses() {
        let mut sig = Signature::default();
        sig.functions.push(SymbolInfo { name: "a".into(), arity: 0 });
        sig.functions.push(SymbolInfo { name: "b".into(), arity: 0 });
        sig.functions.push(SymbolInfo { name: "c".into(), arity: 0 });
        let sorted = sort::infer(&sig);
        let mut order = order_symbols(&sig, &sorted, Default::default());
        rebuild_grounded_terms(&mut order, &sorted, 2, WidgetOrder::default());
        let layout = Layout::build(&sig, 2).unwrap();
        let clauses = canonicity_clauses(&sig, &order, &layout, 0.0, Some(3));
        assert!(clauses.is_empty());
    }
}
