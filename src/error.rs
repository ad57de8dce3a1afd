use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
