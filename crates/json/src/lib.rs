//! `valuekit-json`: JSON adapter for primitive value objects.
//!
//! Primitive value objects are written as their raw value alone (`42`, not
//! `{"value": 42}`), and absent instances as `null`. Reading reconstructs the
//! instance through the core conversion contract.

pub mod convert;
pub mod converter;
pub mod error;
mod fields;
pub mod options;

pub use converter::PrimitiveJsonConverter;
pub use error::{JsonAdapterError, JsonResult};
pub use fields::{option, primitive};
pub use options::JsonOptions;
