use folio_core::{ConfigError, ContentError};
use folio_protocol::ParseSectionError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("page is not mounted")]
    NotMounted,
    #[error("bad config: {0}")]
    Config(#[from] ConfigError),
    #[error("bad content: {0}")]
    Content(#[from] ContentError),
    #[error(transparent)]
    Section(#[from] ParseSectionError),
    #[error("snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
