//! Cross-cutting foundation types.

pub mod error;
