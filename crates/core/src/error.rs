//! Value-object error model.

use thiserror::Error;

/// Result type used across the value-object layer.
pub type ValueObjectResult<T> = Result<T, ValueObjectError>;

/// Failures surfaced by value-object construction and conversion.
///
/// Equality and hashing never produce one of these; they are total. Everything
/// here is either a configuration problem with a closed type (detected once and
/// then cached) or a recoverable lookup / argument problem at a call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// A primitive value object wraps a type outside the scalar allow-list.
    ///
    /// Detected on first use of the closed type; every later use fails the same way.
    #[error("configuration error: `{type_name}` cannot wrap `{value_type}`: {reason}")]
    Configuration {
        type_name: String,
        value_type: String,
        reason: String,
    },

    /// A guarded operation received a malformed argument.
    #[error("invalid argument `{parameter}`: {message}")]
    InvalidArgument { parameter: String, message: String },

    /// The type is not a primitive value object, so it has no wrapped value type.
    #[error("`{type_name}` is not a primitive value object")]
    NotPrimitive { type_name: String },

    /// No dispatch entry exists for the type.
    #[error("`{type_name}` is not registered as a primitive value object")]
    NotRegistered { type_name: String },

    /// The raw value does not match the wrapped type of the target.
    #[error("`{type_name}` has no constructor accepting a raw {raw_kind} value")]
    NoMatchingConstructor { type_name: String, raw_kind: String },

    /// A textual representation could not be parsed into the wrapped type.
    #[error("cannot parse {input:?} as `{type_name}`: {message}")]
    Parse {
        type_name: String,
        input: String,
        message: String,
    },
}

impl ValueObjectError {
    pub fn configuration(
        type_name: impl Into<String>,
        value_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            type_name: type_name.into(),
            value_type: value_type.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    pub fn not_primitive(type_name: impl Into<String>) -> Self {
        Self::NotPrimitive {
            type_name: type_name.into(),
        }
    }

    pub fn not_registered(type_name: impl Into<String>) -> Self {
        Self::NotRegistered {
            type_name: type_name.into(),
        }
    }

    pub fn no_matching_constructor(
        type_name: impl Into<String>,
        raw_kind: impl Into<String>,
    ) -> Self {
        Self::NoMatchingConstructor {
            type_name: type_name.into(),
            raw_kind: raw_kind.into(),
        }
    }

    pub fn parse(
        type_name: impl Into<String>,
        input: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::Parse {
            type_name: type_name.into(),
            input: input.into(),
            message: message.to_string(),
        }
    }

    /// True for failures that are fixed by changing the type definition, not the input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
