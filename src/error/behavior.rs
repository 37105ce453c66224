use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorError {
    Dom(String),
    Storage(String),
    Clipboard(String),
    LegacyCopy(String),
    Config(String),
}

impl Display for BehaviorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BehaviorError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            BehaviorError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            BehaviorError::Clipboard(msg) => write!(f, "Clipboard Error: {}", msg),
            BehaviorError::LegacyCopy(msg) => write!(f, "Legacy Copy Error: {}", msg),
            BehaviorError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for BehaviorError {}

impl From<serde_json::Error> for BehaviorError {
    fn from(error: serde_json::Error) -> Self {
        BehaviorError::Config(error.to_string())
    }
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        BehaviorError::Dom(msg)
    }
}
