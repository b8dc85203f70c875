use base64::Engine as _;

use crate::foundation::error::{FramefillError, FramefillResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where an image field's bytes come from.
pub enum ImageSource {
    /// Base64 payload embedded in a `data:` URI; never touches the network.
    DataUri {
        /// Base64 text after the `base64,` marker.
        payload: String,
    },
    /// Remote URL to fetch.
    Remote {
        /// URL as written in the record field.
        url: String,
    },
}

impl ImageSource {
    /// Classify a record field value as an inline payload or a remote URL.
    pub fn classify(value: &str) -> ImageSource {
        let trimmed = value.trim();
        if let Some(rest) = trimmed.strip_prefix("data:") {
            if let Some((_, payload)) = rest.split_once("base64,") {
                return ImageSource::DataUri {
                    payload: payload.to_string(),
                };
            }
        }
        ImageSource::Remote {
            url: trimmed.to_string(),
        }
    }
}

/// Decode the base64 payload of a data URI into raw image bytes.
pub fn decode_data_uri(payload: &str) -> FramefillResult<Vec<u8>> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| FramefillError::asset(format!("invalid base64 image payload: {e}")))?;
    if bytes.is_empty() {
        return Err(FramefillError::asset("decoded image payload is empty"));
    }
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/imagery/source.rs"]
mod tests;
