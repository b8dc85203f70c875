use tracing::warn;

use crate::{
    dataset::parser::Record,
    foundation::error::FramefillResult,
    host::document::HostDocument,
    host::node::LayerNode,
    imagery::fetch::ImageFetcher,
    imagery::proxy::normalize_image_url,
    imagery::source::{ImageSource, decode_data_uri},
    populate::mapping::{ContentKind, FIELD_MAPPINGS},
};

/// Default font face loaded before text assignment.
const DEFAULT_FONT_FAMILY: &str = "Inter";
const DEFAULT_FONT_STYLE: &str = "Regular";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Outcome counts for one node population pass.
pub struct PopulateStats {
    /// Layers whose content was written.
    pub layers_updated: usize,
    /// Layers skipped after a caught per-layer failure.
    pub layers_skipped: usize,
}

/// Writes one record into the named layers of one container node.
///
/// Layers are updated strictly one at a time; the only suspension points are
/// host font loading and image fetches. Per-layer failures are caught,
/// logged and counted without aborting the rest of the pass, and a partially
/// populated node is an accepted terminal state.
pub struct Populator<'a> {
    host: &'a dyn HostDocument,
    fetcher: &'a dyn ImageFetcher,
    font_family: String,
    font_style: String,
}

impl<'a> Populator<'a> {
    /// Construct a populator over `host` and `fetcher` with the default font.
    pub fn new(host: &'a dyn HostDocument, fetcher: &'a dyn ImageFetcher) -> Self {
        Self {
            host,
            fetcher,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_style: DEFAULT_FONT_STYLE.to_string(),
        }
    }

    /// Override the font face loaded before text assignment.
    pub fn with_font(mut self, family: impl Into<String>, style: impl Into<String>) -> Self {
        self.font_family = family.into();
        self.font_style = style.into();
        self
    }

    /// Populate every mapped layer under `container` from `record`.
    ///
    /// For each entry of the fixed mapping table with a non-empty record
    /// value, every descendant whose name matches exactly receives the
    /// value. There is no rollback.
    #[tracing::instrument(skip_all, fields(container = %container.name))]
    pub async fn populate_node(&self, container: &LayerNode, record: &Record) -> PopulateStats {
        let mut stats = PopulateStats::default();

        for mapping in &FIELD_MAPPINGS {
            let Some(value) = record.get(mapping.record_key) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }

            for layer in container.descendants_named(mapping.layer_name) {
                let applied = match mapping.content {
                    ContentKind::Image => self.apply_image(layer, value).await,
                    ContentKind::Text => self.apply_text(layer, value).await,
                };
                match applied {
                    Ok(()) => stats.layers_updated += 1,
                    Err(error) => {
                        warn!(layer = %layer.name, %error, "layer skipped");
                        stats.layers_skipped += 1;
                    }
                }
            }
        }

        stats
    }

    async fn apply_image(&self, layer: &LayerNode, value: &str) -> FramefillResult<()> {
        let bytes = match ImageSource::classify(value) {
            ImageSource::DataUri { payload } => decode_data_uri(&payload)?,
            ImageSource::Remote { url } => self.fetcher.fetch(&normalize_image_url(&url)).await?,
        };
        let handle = self.host.create_image(&bytes).await?;
        self.host.set_image_fill(&layer.id, &handle).await
    }

    async fn apply_text(&self, layer: &LayerNode, value: &str) -> FramefillResult<()> {
        self.host
            .load_font(&self.font_family, &self.font_style)
            .await?;
        self.host.set_text(&layer.id, value).await
    }
}

#[cfg(test)]
#[path = "../../tests/unit/populate/populator.rs"]
mod tests;
