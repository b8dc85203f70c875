//! Writing record fields into named layers of a host node tree.

pub mod mapping;
pub mod populator;
