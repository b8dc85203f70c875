//! Framefill populates named layers inside design frames with recipe content.
//!
//! The crate is the document-side core of a design-tool plugin: it turns a raw
//! CSV recipe dataset into records, picks the records a user asked for, and
//! writes their text and image fields into host-owned layer trees. The host
//! application keeps ownership of the document, selection, rendering and
//! resource loading; framefill talks to it through the [`HostDocument`] trait
//! and reports progress back to the plugin UI through [`UiEvent`]s.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `csv text -> Vec<Record>` ([`parse_records`])
//! 2. **Match**: `records + query -> ranked candidates` ([`find_matches`]),
//!    or an unbiased random pick when no query is given ([`pick_random`])
//! 3. **Populate**: one record per selected container node, written into
//!    descendants matched by exact layer name ([`Populator`])
//! 4. **Dispatch**: one end-to-end request handled by [`Dispatcher`], with
//!    every failure converted into a user-visible [`UiEvent`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host is single-writer**: nodes and layers are mutated one at a time,
//!   in selection order; the only suspension points are font loading and
//!   image fetches.
//! - **Catch-log-continue**: failures are handled at three scopes (per
//!   layer, per request, top level) and never abort more than their scope.
//! - **No persistence**: nothing outlives a single dispatch except the
//!   constant field-to-layer mapping table.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod dataset;
mod dispatch;
mod foundation;
mod host;
mod imagery;
mod matching;
mod populate;

pub use dataset::parser::{MAX_FIELDS_PER_LINE, Record, parse_records, write_records};
pub use dataset::refine::{apply_pescatarian_override, clean_time_text, refine_records};
pub use dispatch::dispatcher::Dispatcher;
pub use dispatch::message::{EventSink, PluginRequest, UiEvent};
pub use foundation::error::{FramefillError, FramefillResult};
pub use host::document::{HostDocument, ImageHandle};
pub use host::node::{LayerNode, NodeId, NodeKind};
pub use imagery::fetch::{HttpFetcher, ImageFetcher};
pub use imagery::proxy::normalize_image_url;
pub use imagery::source::{ImageSource, decode_data_uri};
pub use matching::matcher::{
    FALLBACK_PICK_DEFAULT, fallback_pick_count, find_matches, pick_random,
};
pub use populate::mapping::{ContentKind, FIELD_MAPPINGS, FieldMapping};
pub use populate::populator::{PopulateStats, Populator};
