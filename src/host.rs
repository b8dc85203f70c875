//! Boundary types for the host-owned document.
//!
//! The host application owns the document, selection and resource loading;
//! this module only models the shape of what it hands over (a snapshot tree
//! of named layers) and the mutations framefill asks it to perform.

pub mod document;
pub mod node;
