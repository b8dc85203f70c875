//! Image sourcing: inline data URIs, proxy URL normalization and fetching.

pub mod fetch;
pub mod proxy;
pub mod source;
