//! Query matching and random sampling over parsed records.

pub mod matcher;
