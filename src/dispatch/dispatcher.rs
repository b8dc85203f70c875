use tracing::{error, warn};

use crate::{
    dataset::parser::parse_records,
    dataset::refine::refine_records,
    dispatch::message::{EventSink, PluginRequest, UiEvent},
    foundation::error::{FramefillError, FramefillResult},
    host::document::HostDocument,
    imagery::fetch::ImageFetcher,
    matching::matcher::{fallback_pick_count, find_matches, pick_random},
    populate::populator::Populator,
};

/// Orchestrates one end-to-end search-and-populate request.
///
/// The dispatcher runs as a single logical asynchronous task: parse, match
/// (or pick randomly), then populate each selected node sequentially. It
/// never propagates failures to the caller; input problems become
/// user-visible error events, anything unexpected is caught once at the top
/// level, and every path ends with a terminating log line.
pub struct Dispatcher<'a> {
    host: &'a dyn HostDocument,
    fetcher: &'a dyn ImageFetcher,
    sink: &'a dyn EventSink,
}

impl<'a> Dispatcher<'a> {
    /// Construct a dispatcher over the host boundary and an event sink.
    pub fn new(
        host: &'a dyn HostDocument,
        fetcher: &'a dyn ImageFetcher,
        sink: &'a dyn EventSink,
    ) -> Self {
        Self {
            host,
            fetcher,
            sink,
        }
    }

    /// Handle one inbound request end to end.
    #[tracing::instrument(skip_all)]
    pub async fn handle(&self, request: PluginRequest) {
        match self.run(request).await {
            Ok(populated) => {
                self.log(format!("Done. Populated {populated} node(s)."));
            }
            Err(FramefillError::Input(message)) => {
                self.sink.emit(UiEvent::error(message.clone()));
                self.log(format!("Stopped: {message}"));
            }
            Err(other) => {
                error!(error = %other, "dispatch failed");
                self.sink
                    .emit(UiEvent::error("Something went wrong while populating recipes."));
                self.log(format!("Unexpected failure: {other}"));
            }
        }
    }

    async fn run(&self, request: PluginRequest) -> FramefillResult<usize> {
        let PluginRequest::SearchRecipes { query, csv_data } = request;

        self.log("Parsing CSV data...");
        let mut records = parse_records(&csv_data);
        refine_records(&mut records);
        self.log(format!("Parsed {} recipe(s).", records.len()));

        let selection = self.host.selection().await?;
        let eligible = selection
            .iter()
            .filter(|node| node.kind.is_populatable())
            .count();

        let query = query.trim();
        let candidates = if query.is_empty() {
            let count = fallback_pick_count(eligible);
            self.log(format!("No query given; picking {count} recipe(s) at random."));
            pick_random(&records, count)
        } else {
            self.log(format!("Searching recipes for \"{query}\"..."));
            find_matches(&records, query)
        };

        if candidates.is_empty() {
            return Err(if query.is_empty() {
                FramefillError::input("The CSV contains no recipes to pick from.")
            } else {
                FramefillError::input(format!("No recipes matched \"{query}\"."))
            });
        }
        if selection.is_empty() {
            return Err(FramefillError::input(
                "Select at least one frame or instance to populate.",
            ));
        }
        self.log(format!("Found {} candidate recipe(s).", candidates.len()));

        let populator = Populator::new(self.host, self.fetcher);
        let mut populated = 0usize;
        for (index, node) in selection.iter().enumerate() {
            if !node.kind.is_populatable() {
                warn!(node = %node.name, "selection entry skipped");
                self.log(format!(
                    "Skipping '{}': not a frame or instance.",
                    node.name
                ));
                continue;
            }

            // Candidates wrap around when fewer than the selection size.
            let record = &candidates[index % candidates.len()];
            let stats = populator.populate_node(node, record).await;
            self.log(format!(
                "Populated '{}': {} layer(s) updated, {} skipped.",
                node.name, stats.layers_updated, stats.layers_skipped
            ));
            populated += 1;
        }

        Ok(populated)
    }

    fn log(&self, message: impl Into<String>) {
        self.sink.emit(UiEvent::log(message));
    }
}
