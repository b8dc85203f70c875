//! CSV dataset parsing and record refinement.

pub mod parser;
pub mod refine;
