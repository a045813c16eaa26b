//! Converter for primitive value objects: an absent instance is JSON `null`,
//! anything else is written as its raw value only.

use core::any::{Any, TypeId};

use serde_json::Value;
use valuekit_core::registry::{self, AnyInstance, PrimitiveRegistry};
use valuekit_core::{PrimitiveValueObject, RawConvert, construct_from_raw, extract_raw_value};

use crate::convert::{json_to_raw, raw_to_json};
use crate::error::JsonResult;
use crate::options::JsonOptions;

/// Reads and writes registered primitive value objects as JSON.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveJsonConverter {
    registry: &'static PrimitiveRegistry,
    options: JsonOptions,
}

impl Default for PrimitiveJsonConverter {
    fn default() -> Self {
        Self::new(JsonOptions::default())
    }
}

impl PrimitiveJsonConverter {
    /// A converter over the process-wide registry.
    pub fn new(options: JsonOptions) -> Self {
        Self::with_registry(registry::global(), options)
    }

    pub fn with_registry(registry: &'static PrimitiveRegistry, options: JsonOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// Whether instances of `type_id` can be handled.
    pub fn can_convert(&self, type_id: TypeId) -> bool {
        self.registry.is_registered(type_id)
    }

    pub fn to_json(&self, value: Option<&dyn Any>) -> JsonResult<Value> {
        match value {
            None => Ok(Value::Null),
            Some(value) => Ok(raw_to_json(&self.registry.extract_raw_value(value)?)),
        }
    }

    pub fn from_json(&self, type_id: TypeId, json: &Value) -> JsonResult<Option<AnyInstance>> {
        let entry = self.registry.entry(type_id)?;
        let raw = json_to_raw(entry.wrapped_value_type(), json).inspect_err(|err| {
            tracing::warn!(
                type_name = entry.descriptor().name(),
                error = %err,
                "unreadable JSON for primitive value object"
            );
        })?;
        Ok(self
            .registry
            .construct_from_raw(type_id, raw, self.options.nulls)?)
    }

    pub fn to_json_typed<T>(&self, value: Option<&T>) -> Value
    where
        T: PrimitiveValueObject,
        T::Value: RawConvert,
    {
        value.map_or(Value::Null, |v| raw_to_json(&extract_raw_value(v)))
    }

    pub fn from_json_typed<T>(&self, json: &Value) -> JsonResult<Option<T>>
    where
        T: PrimitiveValueObject,
        T::Value: RawConvert,
    {
        from_json_with::<T>(json, self.options)
    }
}

pub(crate) fn from_json_with<T>(json: &Value, options: JsonOptions) -> JsonResult<Option<T>>
where
    T: PrimitiveValueObject,
    T::Value: RawConvert,
{
    let wrapped = valuekit_core::wrapped_value_type::<T>()?;
    let raw = json_to_raw(&wrapped, json)?;
    Ok(construct_from_raw::<T>(raw, options.nulls)?)
}
