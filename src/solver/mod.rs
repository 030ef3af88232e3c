/*!
The SolverBridge external contract (spec §6): the interface the encoder and
search loop use to talk to a propositional SAT backend, kept deliberately
thin since a full CDCL solver is out of scope for this crate (spec §1).
*/

pub mod builtin;

/// The verdict of a call to [SolverBridge::solve].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveResult {
    Satisfiable,
    Unsatisfiable,
    Unknown,
}

/// A CNF literal addressed by the 1-based propositional variable computed by
/// [crate::encoder::layout]; negative means negated.
pub type Lit = i64;

/// The `ensureVarCount`/`addClause`/`solve`/`valueOf` interface of spec §6.
///
/// Implementations own their clause storage and are rebuilt fresh on every
/// `reset(n)` (spec §3, §5): there is no cross-round incrementality
/// requirement in this crate.
pub trait SolverBridge {
    /// The SAT variable space will range over `[1..=n]`.
    fn ensure_var_count(&mut self, n: u64);

    /// Append a CNF clause. An empty clause signals immediate unsatisfiability.
    fn add_clause(&mut self, lits: &[Lit]);

    /// Solve the accumulated clause set.
    fn solve(&mut self) -> SolveResult;

    /// The truth value of `lit` under the last satisfying assignment.
    ///
    /// Only meaningful after [SolverBridge::solve] returned [SolveResult::Satisfiable].
    fn value_of(&self, lit: Lit) -> bool;
}
