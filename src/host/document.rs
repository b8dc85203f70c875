use crate::foundation::error::FramefillResult;
use crate::host::node::{LayerNode, NodeId};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Opaque handle to an image resource created by the host.
pub struct ImageHandle(String);

impl ImageHandle {
    /// Construct a handle from the host's resource identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Access the raw resource identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Mutation and resource API exposed by the host application.
///
/// Every method may suspend: font loading and image resource creation are
/// asynchronous host operations. The host document is single-writer, so
/// callers keep at most one mutation in flight at a time.
#[async_trait::async_trait]
pub trait HostDocument: Send + Sync {
    /// Snapshot of the currently selected top-level nodes, in document order.
    async fn selection(&self) -> FramefillResult<Vec<LayerNode>>;

    /// Load a font face so that later text assignment can succeed.
    async fn load_font(&self, family: &str, style: &str) -> FramefillResult<()>;

    /// Replace the text content of a text layer.
    async fn set_text(&self, node: &NodeId, text: &str) -> FramefillResult<()>;

    /// Create a host image resource from encoded image bytes.
    async fn create_image(&self, bytes: &[u8]) -> FramefillResult<ImageHandle>;

    /// Assign an image fill to a layer, if the layer supports fills.
    async fn set_image_fill(&self, node: &NodeId, image: &ImageHandle) -> FramefillResult<()>;
}
