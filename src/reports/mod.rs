/*!
Reports for a search.
*/

use crate::model::Model;
use crate::signature::RawClause;

/// The outcome taxonomy returned to a caller of [crate::search::SearchLoop::run].
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A model of the requested size was found.
    Satisfiable(Model),

    /// No model exists at or below `maxModelSize`; the witness is the empty clause
    /// surfaced by the last unsatisfiable round.
    Refutation(RawClause),

    /// The wall-clock deadline was reached before a verdict was found.
    TimeLimit,

    /// Out of bounds, backend gave up, or the propositional variable space overflowed.
    Unknown,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
            Self::Refutation(_) => write!(f, "Refutation"),
            Self::TimeLimit => write!(f, "TimeLimit"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
