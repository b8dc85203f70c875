#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What kind of content a mapped layer receives.
pub enum ContentKind {
    /// Layer text is replaced with the field value.
    Text,
    /// The field value names image bytes assigned as a fill.
    Image,
}

#[derive(Clone, Copy, Debug)]
/// One entry of the field-to-layer wiring table.
pub struct FieldMapping {
    /// Record key holding the content.
    pub record_key: &'static str,
    /// Exact layer name to populate.
    pub layer_name: &'static str,
    /// Whether the layer receives text or an image fill.
    pub content: ContentKind,
}

/// Fixed wiring between recipe record fields and layer names.
///
/// Constant configuration, not derived from input data; record keys and
/// layer names coincide for all seven entries.
pub const FIELD_MAPPINGS: [FieldMapping; 7] = [
    FieldMapping {
        record_key: "Image",
        layer_name: "Image",
        content: ContentKind::Image,
    },
    FieldMapping {
        record_key: "Title",
        layer_name: "Title",
        content: ContentKind::Text,
    },
    FieldMapping {
        record_key: "Time",
        layer_name: "Time",
        content: ContentKind::Text,
    },
    FieldMapping {
        record_key: "Chef Image",
        layer_name: "Chef Image",
        content: ContentKind::Image,
    },
    FieldMapping {
        record_key: "Chef Name",
        layer_name: "Chef Name",
        content: ContentKind::Text,
    },
    FieldMapping {
        record_key: "Description",
        layer_name: "Description",
        content: ContentKind::Text,
    },
    FieldMapping {
        record_key: "Dietary Requirements",
        layer_name: "Dietary Requirements",
        content: ContentKind::Text,
    },
];

#[cfg(test)]
#[path = "../../tests/unit/populate/mapping.rs"]
mod tests;
