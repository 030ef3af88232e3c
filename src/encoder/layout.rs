/*!
The propositional variable layout (spec §3 "Propositional variable layout",
§4.4 `var(symbol, tuple, isFunction)`).

Rebuilt on every `reset(n)`; immutable for the rest of the round.
*/

use crate::signature::{FunctionId, PredicateId, Signature};
use crate::types::err::ErrorKind;

/// The address-space width. With `wide_vars` enabled the backend is assumed
/// to accept a `u64` variable space; otherwise the classic `u32` range.
fn max_vars() -> u64 {
    if cfg!(feature = "wide_vars") {
        u64::MAX
    } else {
        u32::MAX as u64
    }
}

/// The variable-offset table for one round at a fixed domain size `n`.
#[derive(Clone, Debug)]
pub struct Layout {
    pub n: u32,

    /// Indexed by `FunctionId.0`: offset of `f`'s block.
    function_offset: Vec<u64>,

    /// Indexed by `PredicateId.0`: offset of `p`'s block.
    predicate_offset: Vec<u64>,

    /// The highest live propositional variable id (spec §8, invariant 1).
    pub total_vars: u64,
}

impl Layout {
    /// Build the layout for domain size `n`. Variable `1` is reserved and
    /// never emitted (spec §4.4, "the special literal for predicate index 0");
    /// symbol blocks are laid out after it, functions then predicates, in
    /// symbol-id order (spec §9: any dependency-free order is valid).
    pub fn build(signature: &Signature, n: u32) -> Result<Layout, ErrorKind> {
        let n64 = n as u64;
        let limit = max_vars();

        let mut next: u64 = 2;
        let mut function_offset = Vec::with_capacity(signature.functions.len());
        for sym in &signature.functions {
            function_offset.push(next);
            let block = n64
                .checked_pow(sym.arity + 1)
                .ok_or(ErrorKind::VariableSpaceOverflow)?;
            next = next
                .checked_add(block)
                .filter(|v| *v <= limit)
                .ok_or(ErrorKind::VariableSpaceOverflow)?;
        }

        let mut predicate_offset = Vec::with_capacity(signature.predicates.len());
        for sym in &signature.predicates {
            predicate_offset.push(next);
            let block = n64
                .checked_pow(sym.arity)
                .ok_or(ErrorKind::VariableSpaceOverflow)?;
            next = next
                .checked_add(block)
                .filter(|v| *v <= limit)
                .ok_or(ErrorKind::VariableSpaceOverflow)?;
        }

        Ok(Layout {
            n,
            function_offset,
            predicate_offset,
            total_vars: next - 1,
        })
    }

    /// `var(f, tuple)` where `tuple` is `(d_1, .., d_k, d_image)`, length `arity(f) + 1`.
    pub fn function_var(&self, f: FunctionId, tuple: &[u32]) -> i64 {
        let offset = self.function_offset[f.0 as usize];
        self.address(offset, tuple)
    }

    /// `var(p, tuple)` where `tuple` is `(d_1, .., d_k)`, length `arity(p)`.
    pub fn predicate_var(&self, p: PredicateId, tuple: &[u32]) -> i64 {
        let offset = self.predicate_offset[p.0 as usize];
        self.address(offset, tuple)
    }

    fn address(&self, offset: u64, tuple: &[u32]) -> i64 {
        let n = self.n as u64;
        let mut addr = offset;
        let mut scale = 1u64;
        for &d in tuple {
            addr += (d as u64 - 1) * scale;
            scale *= n;
        }
        addr as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SymbolInfo;

    #[test]
    fn total_vars_matches_the_closed_form() {
        let mut sig = Signature::default();
        sig.functions.push(SymbolInfo { name: "f".into(), arity: 1 });
        sig.predicates.push(SymbolInfo { name: "p".into(), arity: 2 });
        let n = 3u32;
        let layout = Layout::build(&sig, n).unwrap();
        let expected = 1 + n.pow(2) as u64 + n.pow(2) as u64;
        assert_eq!(layout.total_vars, expected);
    }

    #[test]
    fn distinct_tuples_get_distinct_variables() {
        let mut sig = Signature::default();
        sig.functions.push(SymbolInfo { name: "f".into(), arity: 1 });
        let f = FunctionId(0);
        let layout = Layout::build(&sig, 2).unwrap();
        let v11 = layout.function_var(f, &[1, 1]);
        let v12 = layout.function_var(f, &[1, 2]);
        let v21 = layout.function_var(f, &[2, 1]);
        assert!(v11 != v12 && v11 != v21 && v12 != v21);
    }
}
