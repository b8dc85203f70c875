#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Host-assigned node identifier.
pub struct NodeId(String);

impl NodeId {
    /// Construct a [`NodeId`] from a host identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Access the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Closed set of node variants the populator distinguishes.
pub enum NodeKind {
    /// Container frame; a valid population target.
    Frame,
    /// Component instance; a valid population target.
    Instance,
    /// Text layer.
    Text,
    /// Shape layer capable of holding fills.
    Shape,
    /// Anything else the host exposes.
    Other,
}

impl NodeKind {
    /// Whether a selected node of this kind may be populated.
    pub fn is_populatable(self) -> bool {
        matches!(self, NodeKind::Frame | NodeKind::Instance)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Snapshot of one host node and its subtree.
///
/// Children are ordered; traversal over them is pre-order (parent before
/// children), which matches the host's document order. The snapshot exists
/// only for the duration of one population pass and is never cached.
pub struct LayerNode {
    /// Host identifier used for mutations.
    pub id: NodeId,
    /// Exact layer name; population targets are matched on equality.
    pub name: String,
    /// Node variant.
    pub kind: NodeKind,
    /// Ordered child nodes.
    #[serde(default)]
    pub children: Vec<LayerNode>,
}

impl LayerNode {
    /// Construct a leaf node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Attach ordered children, builder style.
    pub fn with_children(mut self, children: Vec<LayerNode>) -> Self {
        self.children = children;
        self
    }

    /// Collect every descendant (the container itself excluded) whose name
    /// equals `name` exactly, in document (pre-order) order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a LayerNode> {
        let mut found = Vec::new();
        for child in &self.children {
            collect_named(child, name, &mut found);
        }
        found
    }
}

fn collect_named<'a>(node: &'a LayerNode, name: &str, out: &mut Vec<&'a LayerNode>) {
    if node.name == name {
        out.push(node);
    }
    for child in &node.children {
        collect_named(child, name, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/node.rs"]
mod tests;
