//! `valuekit-core`: value objects with structural equality.
//!
//! Value objects are compared, hashed and rendered through an ordered list of
//! equality components. Primitive value objects wrap exactly one scalar and
//! add ordering plus a raw-value conversion contract; value collections give
//! lists, sets and dictionaries content-based equality.

#[macro_use]
mod macros;

pub mod classify;
pub mod collections;
pub mod component;
pub mod descriptor;
mod enumeration;
pub mod equality;
pub mod error;
pub mod guard;
pub mod metadata;
pub mod primitive;
pub mod raw;
pub mod registry;
mod scalar;
pub mod value_object;

pub use collections::{AsValueCollection, ValueDictionary, ValueList, ValueSet};
pub use component::{ComponentValue, EqualityComponent, Rendered};
pub use descriptor::{Describe, ScalarKind, TypeDescriptor, TypeShape};
pub use enumeration::Enumeration;
pub use error::{ValueObjectError, ValueObjectResult};
pub use primitive::PrimitiveValueObject;
pub use raw::{RawConvert, RawValue};
pub use registry::{
    NullHandling, PrimitiveEntry, PrimitiveRegistry, construct_from_raw, extract_raw_value,
    is_primitive_value_object, is_value_object, wrapped_value_type,
};
pub use value_object::{DynValueObject, ValueObject};
