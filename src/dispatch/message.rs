use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
/// Inbound request from the plugin UI.
pub enum PluginRequest {
    /// Parse a CSV dataset and populate the current selection.
    #[serde(rename = "search-recipes")]
    SearchRecipes {
        /// Free-text query; an empty string falls back to a random pick.
        #[serde(default)]
        query: String,
        /// Raw CSV text: header line plus data lines.
        #[serde(rename = "csvData")]
        csv_data: String,
    },
}

impl PluginRequest {
    /// Decode an inbound UI message.
    ///
    /// Messages with an unknown `type` tag (or no parseable body) are
    /// ignored, not errors: the UI may broadcast messages this core does
    /// not handle.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(request) => Some(request),
            Err(error) => {
                debug!(%error, "ignoring unhandled ui message");
                None
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Outbound event for the plugin UI log view.
pub enum UiEvent {
    /// Progress or diagnostic line.
    Log {
        /// Human-readable log line.
        message: String,
    },
    /// User-facing failure.
    Error {
        /// Human-readable error description.
        message: String,
    },
}

impl UiEvent {
    /// Build a [`UiEvent::Log`].
    pub fn log(message: impl Into<String>) -> Self {
        Self::Log {
            message: message.into(),
        }
    }

    /// Build a [`UiEvent::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Receiver for outbound UI events.
///
/// The embedding shell forwards emitted events over the host's message
/// channel; tests record them.
pub trait EventSink: Send + Sync {
    /// Deliver one event to the UI.
    fn emit(&self, event: UiEvent);
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/message.rs"]
mod tests;
