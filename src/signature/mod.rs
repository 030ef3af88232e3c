/*!
A read-only view over the input signature and clause set.

This corresponds to the "Signature & Term View" and "ClausePreparer" external
collaborators of spec §2/§4.1: in a full system these would be owned by a
term-representation and clause-flattening front end upstream of this crate.
Here they are modelled directly, kept deliberately thin, since flattening and
general clause splitting are explicitly out of scope (spec §1).
*/

mod prepare;
pub use prepare::{prepare, Prepared};

/// A function symbol. Nullary function symbols are constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub u32);

/// A predicate symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredicateId(pub u32);

/// A logical variable, dense from `0` within the clause it occurs in (the
/// post-condition [ClausePreparer](crate::signature) guarantees, spec §4.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub u32);

/// A function or predicate symbol together with its arity and display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: String,
    pub arity: u32,
}

/// A flat literal, per the [ClausePreparer](crate::signature) contract (spec §4.1):
/// every literal is either a variable-to-variable (dis)equality, a definition
/// equality `f(x̄) = y` with distinct variables, or a predicate atom over variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawLiteral {
    /// `x = y` (polarity `true`) or `x != y` (polarity `false`).
    VarEq {
        x: VarId,
        y: VarId,
        polarity: bool,
    },

    /// `f(args) = image` (polarity `true`) or its negation (polarity `false`).
    ///
    /// `args` and `image` are pairwise-distinct variables, per the flatness
    /// invariant; `args.len()` must equal the arity of `function`.
    DefEq {
        function: FunctionId,
        args: Vec<VarId>,
        image: VarId,
        polarity: bool,
    },

    /// `p(args)` (polarity `true`) or its negation (polarity `false`).
    Pred {
        predicate: PredicateId,
        args: Vec<VarId>,
        polarity: bool,
    },
}

impl RawLiteral {
    /// The variables this literal mentions.
    pub fn vars(&self) -> Vec<VarId> {
        match self {
            RawLiteral::VarEq { x, y, .. } => vec![*x, *y],
            RawLiteral::DefEq { args, image, .. } => {
                let mut v = args.clone();
                v.push(*image);
                v
            }
            RawLiteral::Pred { args, .. } => args.clone(),
        }
    }
}

/// A disjunction of [RawLiteral]s.
pub type RawClause = Vec<RawLiteral>;

/// A read-only view over function and predicate symbols and the clause set,
/// standing in for the external "Signature & Term View" collaborator.
#[derive(Clone, Debug, Default)]
pub struct Signature {
    pub functions: Vec<SymbolInfo>,
    pub predicates: Vec<SymbolInfo>,
    pub clauses: Vec<RawClause>,
}

impl Signature {
    pub fn function_arity(&self, f: FunctionId) -> u32 {
        self.functions[f.0 as usize].arity
    }

    pub fn predicate_arity(&self, p: PredicateId) -> u32 {
        self.predicates[p.0 as usize].arity
    }

    pub fn function_name(&self, f: FunctionId) -> &str {
        &self.functions[f.0 as usize].name
    }

    pub fn predicate_name(&self, p: PredicateId) -> &str {
        &self.predicates[p.0 as usize].name
    }

    /// Constants: function symbols of arity zero.
    pub fn constants(&self) -> impl Iterator<Item = FunctionId> + '_ {
        self.functions
            .iter()
            .enumerate()
            .filter(|(_, s)| s.arity == 0)
            .map(|(i, _)| FunctionId(i as u32))
    }

    /// Whether the problem is effectively propositional: no function symbol
    /// of arity greater than zero (spec glossary, "EPR").
    pub fn is_epr(&self) -> bool {
        self.functions.iter().all(|s| s.arity == 0)
    }
}
