//! Generic helpers with no dependency on the rest of the crate.

pub mod mixed_radix;
