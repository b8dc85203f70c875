//! Shared scripted doubles for end-to-end dispatch tests.

use std::sync::Mutex;

use framefill::{
    EventSink, FramefillError, FramefillResult, HostDocument, ImageFetcher, ImageHandle,
    LayerNode, NodeId, UiEvent,
};

/// In-memory host scripted with a fixed selection snapshot.
#[derive(Default)]
pub struct ScriptedHost {
    pub selection: Vec<LayerNode>,
    pub fail_selection: bool,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedHost {
    pub fn with_selection(selection: Vec<LayerNode>) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl HostDocument for ScriptedHost {
    async fn selection(&self) -> FramefillResult<Vec<LayerNode>> {
        if self.fail_selection {
            return Err(FramefillError::host("document went away"));
        }
        Ok(self.selection.clone())
    }

    async fn load_font(&self, family: &str, style: &str) -> FramefillResult<()> {
        self.push(format!("font:{family}:{style}"));
        Ok(())
    }

    async fn set_text(&self, node: &NodeId, text: &str) -> FramefillResult<()> {
        self.push(format!("text:{}:{text}", node.as_str()));
        Ok(())
    }

    async fn create_image(&self, bytes: &[u8]) -> FramefillResult<ImageHandle> {
        self.push(format!("image:{}", bytes.len()));
        Ok(ImageHandle::new("img-1"))
    }

    async fn set_image_fill(&self, node: &NodeId, image: &ImageHandle) -> FramefillResult<()> {
        self.push(format!("fill:{}:{}", node.as_str(), image.as_str()));
        Ok(())
    }
}

/// Fetcher double that records requested URLs and serves fixed bytes.
#[derive(Default)]
pub struct StubFetcher {
    pub urls: Mutex<Vec<String>>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl ImageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> FramefillResult<Vec<u8>> {
        self.urls.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(FramefillError::asset("network down"));
        }
        Ok(vec![1, 2, 3, 4])
    }
}

/// Event sink that records everything emitted during a dispatch.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<UiEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Error { message } => Some(message),
                UiEvent::Log { .. } => None,
            })
            .collect()
    }

    pub fn log_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Log { message } => Some(message),
                UiEvent::Error { .. } => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}
