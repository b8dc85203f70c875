//! UI message types and end-to-end request handling.

pub mod dispatcher;
pub mod message;
