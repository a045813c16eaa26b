//! Conversion contract used by adapters (serializers, mappers) that only know
//! a type at runtime.
//!
//! Typed callers use the free functions at the bottom of this module. Callers
//! holding a `TypeId` or a `&dyn Any` go through a [`PrimitiveRegistry`], a small
//! dispatch table of monomorphized function pointers filled by
//! [`PrimitiveRegistry::register`].

use core::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::descriptor::{Describe, TypeDescriptor};
use crate::error::{ValueObjectError, ValueObjectResult};
use crate::metadata;
use crate::primitive::{self, PrimitiveValueObject};
use crate::raw::{RawConvert, RawValue};

/// A constructed instance with its concrete type erased.
pub type AnyInstance = Box<dyn Any + Send + Sync>;

type ExtractFn = fn(&dyn Any) -> Option<RawValue>;
type ConstructFn = fn(RawValue) -> ValueObjectResult<AnyInstance>;
type ParseFn = fn(&str) -> ValueObjectResult<AnyInstance>;

/// What to do with a `RawValue::Null` on reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullHandling {
    /// Null in, no instance out.
    #[default]
    Propagate,
    /// Null is an invalid argument.
    Reject,
}

/// Dispatch entry for one registered primitive value object type.
#[derive(Debug, Clone)]
pub struct PrimitiveEntry {
    descriptor: TypeDescriptor,
    wrapped: TypeDescriptor,
    extract: ExtractFn,
    construct: ConstructFn,
    parse: ParseFn,
}

impl PrimitiveEntry {
    fn of<T>() -> ValueObjectResult<Self>
    where
        T: PrimitiveValueObject + Send + Sync,
        T::Value: RawConvert,
    {
        metadata::ensure_valid::<T>()?;
        let meta = metadata::metadata_of::<T>();

        Ok(Self {
            descriptor: meta.descriptor().clone(),
            wrapped: meta.wrapped_value_type()?.clone(),
            extract: extract_erased::<T>,
            construct: construct_erased::<T>,
            parse: parse_erased::<T>,
        })
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn wrapped_value_type(&self) -> &TypeDescriptor {
        &self.wrapped
    }

    /// `None` when `value` is not this entry's type.
    pub fn extract(&self, value: &dyn Any) -> Option<RawValue> {
        (self.extract)(value)
    }

    pub fn construct(&self, raw: RawValue) -> ValueObjectResult<AnyInstance> {
        (self.construct)(raw)
    }

    pub fn parse(&self, input: &str) -> ValueObjectResult<AnyInstance> {
        (self.parse)(input)
    }
}

fn extract_erased<T>(value: &dyn Any) -> Option<RawValue>
where
    T: PrimitiveValueObject,
    T::Value: RawConvert,
{
    value.downcast_ref::<T>().map(primitive::extract_raw)
}

fn construct_erased<T>(raw: RawValue) -> ValueObjectResult<AnyInstance>
where
    T: PrimitiveValueObject + Send + Sync,
    T::Value: RawConvert,
{
    primitive::construct_raw::<T>(raw).map(|v| Box::new(v) as AnyInstance)
}

fn parse_erased<T>(input: &str) -> ValueObjectResult<AnyInstance>
where
    T: PrimitiveValueObject + Send + Sync,
    T::Value: RawConvert,
{
    primitive::parse_primitive::<T>(input).map(|v| Box::new(v) as AnyInstance)
}

/// Runtime dispatch table keyed by `TypeId`.
#[derive(Debug, Default)]
pub struct PrimitiveRegistry {
    entries: RwLock<HashMap<TypeId, Arc<PrimitiveEntry>>>,
}

static GLOBAL: Lazy<PrimitiveRegistry> = Lazy::new(PrimitiveRegistry::new);

/// The process-wide registry.
pub fn global() -> &'static PrimitiveRegistry {
    &GLOBAL
}

impl PrimitiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T`; idempotent. Fails with the cached configuration error
    /// when `T` wraps a disallowed type.
    pub fn register<T>(&self) -> ValueObjectResult<Arc<PrimitiveEntry>>
    where
        T: PrimitiveValueObject + Send + Sync,
        T::Value: RawConvert,
    {
        let id = TypeId::of::<T>();
        if let Some(entry) = self.entries.read().get(&id) {
            return Ok(Arc::clone(entry));
        }

        let entry = Arc::new(PrimitiveEntry::of::<T>()?);
        let mut entries = self.entries.write();
        let stored = entries.entry(id).or_insert_with(|| {
            tracing::debug!(
                type_name = entry.descriptor.name(),
                wrapped = entry.wrapped.name(),
                "registered primitive value object"
            );
            Arc::clone(&entry)
        });
        Ok(Arc::clone(stored))
    }

    pub fn is_registered(&self, id: TypeId) -> bool {
        self.entries.read().contains_key(&id)
    }

    pub fn entry(&self, id: TypeId) -> ValueObjectResult<Arc<PrimitiveEntry>> {
        self.entries.read().get(&id).cloned().ok_or_else(|| {
            ValueObjectError::not_registered(format!(
                "unnamed type ({id:?}, looked up by TypeId)"
            ))
        })
    }

    /// Looks an entry up by full or short type name.
    pub fn entry_by_name(&self, name: &str) -> Option<Arc<PrimitiveEntry>> {
        self.entries
            .read()
            .values()
            .find(|e| e.descriptor.name() == name || e.descriptor.short_name() == name)
            .cloned()
    }

    /// Reads the wrapped value of a registered primitive value object.
    pub fn extract_raw_value(&self, value: &dyn Any) -> ValueObjectResult<RawValue> {
        let entry = self.entry(value.type_id())?;
        entry
            .extract(value)
            .ok_or_else(|| ValueObjectError::not_registered(entry.descriptor.name()))
    }

    /// Builds an instance of the type `id` from `raw`.
    ///
    /// When the wrapped type is an `Option`, `Null` is an ordinary value and
    /// builds an instance holding `None`. Otherwise `Null` yields `Ok(None)`
    /// under [`NullHandling::Propagate`]. Any other variant must match the
    /// wrapped type exactly.
    pub fn construct_from_raw(
        &self,
        id: TypeId,
        raw: RawValue,
        nulls: NullHandling,
    ) -> ValueObjectResult<Option<AnyInstance>> {
        let entry = self.entry(id)?;
        if raw.is_null() && !entry.wrapped.is_optional() {
            return null_instance(entry.descriptor.name(), nulls);
        }
        entry.construct(raw).map(Some)
    }

    /// String conversion in, for the type `id`.
    pub fn parse(&self, id: TypeId, input: &str) -> ValueObjectResult<AnyInstance> {
        self.entry(id)?.parse(input)
    }

    /// String conversion out: the wrapped value's text.
    pub fn format(&self, value: &dyn Any) -> ValueObjectResult<String> {
        Ok(self.extract_raw_value(value)?.to_string())
    }
}

fn null_instance<T>(type_name: &str, nulls: NullHandling) -> ValueObjectResult<Option<T>> {
    match nulls {
        NullHandling::Propagate => Ok(None),
        NullHandling::Reject => {
            tracing::warn!(type_name, "rejected null raw value");
            Err(ValueObjectError::invalid_argument(
                "raw",
                format!("null is not accepted for {type_name}"),
            ))
        }
    }
}

/// Whether `T` is a concrete value object.
pub fn is_value_object<T: Describe>() -> bool {
    metadata::metadata_of::<T>().is_value_object()
}

/// Whether `T` (or the `T` inside one `Option`) is a primitive value object.
pub fn is_primitive_value_object<T: Describe>() -> bool {
    metadata::metadata_of::<T>().is_primitive_value_object()
}

/// Descriptor of the value `T` wraps; `NotPrimitive` otherwise.
pub fn wrapped_value_type<T: Describe>() -> ValueObjectResult<TypeDescriptor> {
    metadata::metadata_of::<T>().wrapped_value_type().cloned()
}

pub fn extract_raw_value<T>(value: &T) -> RawValue
where
    T: PrimitiveValueObject,
    T::Value: RawConvert,
{
    primitive::extract_raw(value)
}

/// Typed reconstruction with the same null policy as
/// [`PrimitiveRegistry::construct_from_raw`].
pub fn construct_from_raw<T>(raw: RawValue, nulls: NullHandling) -> ValueObjectResult<Option<T>>
where
    T: PrimitiveValueObject,
    T::Value: RawConvert,
{
    if raw.is_null() && !T::Value::descriptor().is_optional() {
        return null_instance(core::any::type_name::<T>(), nulls);
    }
    primitive::construct_raw::<T>(raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarKind;

    #[derive(Debug, Clone)]
    struct Code(String);
    crate::primitive_value_object!(Code(String));

    #[derive(Debug, Clone)]
    struct Count(u16);
    crate::primitive_value_object!(Count(u16));

    #[test]
    fn register_is_idempotent() {
        let registry = PrimitiveRegistry::new();
        let first = registry.register::<Code>().unwrap();
        let second = registry.register::<Code>().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.wrapped_value_type().scalar_kind(), Some(ScalarKind::String));
    }

    #[test]
    fn unregistered_types_are_reported() {
        let registry = PrimitiveRegistry::new();
        let err = registry.entry(TypeId::of::<Count>()).unwrap_err();
        assert!(matches!(err, ValueObjectError::NotRegistered { .. }));
        assert!(err.to_string().contains("looked up by TypeId"));
        assert!(registry.extract_raw_value(&Count(1)).is_err());
    }

    #[derive(Debug, Clone)]
    struct Nickname(Option<String>);
    crate::primitive_value_object!(Nickname(Option<String>));

    #[test]
    fn null_builds_an_instance_when_the_wrapped_type_is_optional() {
        let registry = PrimitiveRegistry::new();
        registry.register::<Nickname>().unwrap();
        let id = TypeId::of::<Nickname>();

        let raw = registry.extract_raw_value(&Nickname(None)).unwrap();
        assert_eq!(raw, RawValue::Null);
        for nulls in [NullHandling::Propagate, NullHandling::Reject] {
            let rebuilt = registry
                .construct_from_raw(id, raw.clone(), nulls)
                .unwrap()
                .unwrap();
            assert_eq!(rebuilt.downcast_ref::<Nickname>(), Some(&Nickname(None)));
        }
    }

    #[test]
    fn dynamic_round_trip_through_raw() {
        let registry = PrimitiveRegistry::new();
        registry.register::<Count>().unwrap();

        let raw = registry.extract_raw_value(&Count(42)).unwrap();
        assert_eq!(raw, RawValue::U16(42));

        let rebuilt = registry
            .construct_from_raw(TypeId::of::<Count>(), raw, NullHandling::Propagate)
            .unwrap()
            .unwrap();
        assert_eq!(rebuilt.downcast_ref::<Count>(), Some(&Count(42)));
    }

    #[test]
    fn mismatched_raw_kind_has_no_constructor() {
        let registry = PrimitiveRegistry::new();
        registry.register::<Count>().unwrap();

        let err = registry
            .construct_from_raw(TypeId::of::<Count>(), RawValue::I64(42), NullHandling::Propagate)
            .unwrap_err();
        assert!(matches!(err, ValueObjectError::NoMatchingConstructor { .. }));
    }

    #[test]
    fn null_policy_is_honoured() {
        let registry = PrimitiveRegistry::new();
        registry.register::<Code>().unwrap();
        let id = TypeId::of::<Code>();

        assert!(registry
            .construct_from_raw(id, RawValue::Null, NullHandling::Propagate)
            .unwrap()
            .is_none());
        let err = registry
            .construct_from_raw(id, RawValue::Null, NullHandling::Reject)
            .unwrap_err();
        assert!(matches!(err, ValueObjectError::InvalidArgument { .. }));
    }

    #[test]
    fn parse_and_format_use_the_wrapped_text() {
        let registry = PrimitiveRegistry::new();
        registry.register::<Count>().unwrap();

        let parsed = registry.parse(TypeId::of::<Count>(), "7").unwrap();
        assert_eq!(parsed.downcast_ref::<Count>(), Some(&Count(7)));
        assert_eq!(registry.format(&Count(7)).unwrap(), "7");
        assert!(registry.entry_by_name("Count").is_some());
    }

    #[test]
    fn typed_contract() {
        assert!(is_value_object::<Code>());
        assert!(is_primitive_value_object::<Option<Code>>());
        assert!(!is_primitive_value_object::<String>());
        assert_eq!(wrapped_value_type::<Count>().unwrap(), u16::descriptor());
        assert_eq!(extract_raw_value(&Code("x".into())), RawValue::String("x".into()));
        assert_eq!(
            construct_from_raw::<Code>(RawValue::String("x".into()), NullHandling::Reject).unwrap(),
            Some(Code("x".into()))
        );
    }
}
