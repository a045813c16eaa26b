//! Process-wide cache of per-type structural metadata.
//!
//! Entries are immutable once inserted. Creation is pure, so two threads racing
//! on the same type both compute it and the first insert wins; the loser's
//! result is dropped.

use core::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::classify;
use crate::descriptor::{Describe, TypeDescriptor};
use crate::error::{ValueObjectError, ValueObjectResult};

static CACHE: Lazy<RwLock<HashMap<TypeId, Arc<TypeMetadata>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// What classification discovered about a closed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMetadata {
    descriptor: TypeDescriptor,
    is_value_object: bool,
    wrapped: Option<TypeDescriptor>,
    validation: ValueObjectResult<()>,
}

impl TypeMetadata {
    fn compute(descriptor: TypeDescriptor) -> Self {
        let is_value_object = classify::is_value_object(&descriptor);
        let wrapped = classify::wrapped_value_type(&descriptor).ok().cloned();

        let validation = match &wrapped {
            Some(wrapped) if !classify::is_allowed_wrapped_type(wrapped) => {
                let err = ValueObjectError::configuration(
                    descriptor.name(),
                    wrapped.name(),
                    "wrapped value must be a scalar (number, bool, char, string, decimal, \
                     date, time, duration, uuid or enumeration), optionally in one Option",
                );
                tracing::error!(
                    type_name = descriptor.name(),
                    wrapped = wrapped.name(),
                    "invalid primitive value object"
                );
                Err(err)
            }
            _ => Ok(()),
        };

        Self {
            descriptor,
            is_value_object,
            wrapped,
            validation,
        }
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn is_value_object(&self) -> bool {
        self.is_value_object
    }

    /// Looks through one `Option`, like [`classify::is_primitive_value_object`].
    pub fn is_primitive_value_object(&self) -> bool {
        self.wrapped.is_some() && !self.descriptor.unwrap_optional().is_abstract()
    }

    pub fn wrapped_value_type(&self) -> ValueObjectResult<&TypeDescriptor> {
        self.wrapped
            .as_ref()
            .ok_or_else(|| ValueObjectError::not_primitive(self.descriptor.name()))
    }

    /// Outcome of the one-time allow-list check. Always `Ok` for types that
    /// are not primitive value objects.
    pub fn validation(&self) -> &ValueObjectResult<()> {
        &self.validation
    }
}

/// Metadata for `T`, computed on first request.
pub fn metadata_of<T: Describe>() -> Arc<TypeMetadata> {
    metadata_for(TypeId::of::<T>(), T::descriptor)
}

/// Fetches the entry for `id`, building it from `describe` if absent.
pub fn metadata_for(id: TypeId, describe: impl FnOnce() -> TypeDescriptor) -> Arc<TypeMetadata> {
    if let Some(found) = CACHE.read().get(&id) {
        return Arc::clone(found);
    }

    let computed = Arc::new(TypeMetadata::compute(describe()));
    let mut cache = CACHE.write();
    let entry = cache.entry(id).or_insert_with(|| {
        tracing::debug!(
            type_name = computed.descriptor.name(),
            is_value_object = computed.is_value_object,
            is_primitive = computed.is_primitive_value_object(),
            "cached value-object metadata"
        );
        Arc::clone(&computed)
    });
    Arc::clone(entry)
}

/// Validates `T` once; later calls return the cached outcome.
pub fn ensure_valid<T: Describe>() -> ValueObjectResult<()> {
    metadata_of::<T>().validation().clone()
}
