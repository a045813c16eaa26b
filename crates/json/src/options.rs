//! Adapter options read from the environment.
//!
//! `VALUEKIT_JSON_NULLS` selects how JSON `null` is reconstructed:
//! `propagate` (default, no instance) or `reject` (error).

use valuekit_core::NullHandling;

use crate::error::{JsonAdapterError, JsonResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonOptions {
    pub nulls: NullHandling,
}

impl JsonOptions {
    pub fn new(nulls: NullHandling) -> Self {
        Self { nulls }
    }

    pub fn from_env() -> JsonResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> JsonResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let nulls = match lookup("VALUEKIT_JSON_NULLS") {
            None => NullHandling::default(),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "propagate" => NullHandling::Propagate,
                "reject" => NullHandling::Reject,
                other => {
                    return Err(JsonAdapterError::Options(format!(
                        "VALUEKIT_JSON_NULLS must be `propagate` or `reject`, got `{other}`"
                    )));
                }
            },
        };
        Ok(Self { nulls })
    }
}
