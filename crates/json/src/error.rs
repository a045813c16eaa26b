use thiserror::Error;
use valuekit_core::ValueObjectError;

pub type JsonResult<T> = Result<T, JsonAdapterError>;

/// Errors raised while moving primitive value objects through JSON.
#[derive(Debug, Error)]
pub enum JsonAdapterError {
    #[error(transparent)]
    ValueObject(#[from] ValueObjectError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} for {type_name}, found {found}")]
    UnexpectedJson {
        type_name: String,
        expected: String,
        found: String,
    },

    #[error("invalid JSON options: {0}")]
    Options(String),
}

impl JsonAdapterError {
    pub fn unexpected_json(
        type_name: impl Into<String>,
        expected: impl Into<String>,
        found: &serde_json::Value,
    ) -> Self {
        Self::UnexpectedJson {
            type_name: type_name.into(),
            expected: expected.into(),
            found: json_kind(found).to_string(),
        }
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
