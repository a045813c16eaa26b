//! Type descriptors: the runtime view of a type that classification works on.

use core::any::TypeId;
use core::fmt;

/// Scalar types a primitive value object is allowed to wrap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    Decimal,
    Date,
    DateTime,
    DateTimeOffset,
    Time,
    Duration,
    Uuid,
    Enumeration,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::I128 => "i128",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::U128 => "u128",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Char => "char",
            ScalarKind::String => "string",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Date => "date",
            ScalarKind::DateTime => "date-time",
            ScalarKind::DateTimeOffset => "date-time-offset",
            ScalarKind::Time => "time",
            ScalarKind::Duration => "duration",
            ScalarKind::Uuid => "uuid",
            ScalarKind::Enumeration => "enumeration",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What kind of type a descriptor stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A member of the scalar allow-list.
    Scalar(ScalarKind),
    /// `Option<T>`: one level of nullability around `inner`.
    Optional(Box<TypeDescriptor>),
    /// A value object whose components are its declared fields.
    ValueObject { is_abstract: bool },
    /// A value object wrapping exactly one value of type `wrapped`.
    PrimitiveValueObject { wrapped: Box<TypeDescriptor> },
    /// Anything else.
    Opaque,
}

/// Runtime description of a closed type.
///
/// `base` links a refining type to the type it refines (e.g. a German bank
/// account to the general bank account). Classification walks that chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    shape: TypeShape,
    base: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    fn of<T: ?Sized + 'static>(shape: TypeShape) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
            shape,
            base: None,
        }
    }

    pub fn scalar<T: 'static>(kind: ScalarKind) -> Self {
        Self::of::<T>(TypeShape::Scalar(kind))
    }

    pub fn optional<T: 'static>(inner: TypeDescriptor) -> Self {
        Self::of::<T>(TypeShape::Optional(Box::new(inner)))
    }

    pub fn value_object<T: 'static>() -> Self {
        Self::of::<T>(TypeShape::ValueObject { is_abstract: false })
    }

    pub fn primitive_value_object<T: 'static, V: Describe>() -> Self {
        Self::of::<T>(TypeShape::PrimitiveValueObject {
            wrapped: Box::new(V::descriptor()),
        })
    }

    pub fn opaque<T: ?Sized + 'static>() -> Self {
        Self::of::<T>(TypeShape::Opaque)
    }

    /// Marks a value-object descriptor as abstract (a family, never instantiated).
    pub fn into_abstract(mut self) -> Self {
        if let TypeShape::ValueObject { is_abstract } = &mut self.shape {
            *is_abstract = true;
        }
        self
    }

    /// Records that this type refines `base`.
    pub fn derived_from(mut self, base: TypeDescriptor) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without module path (generic arguments kept).
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }

    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    pub fn base(&self) -> Option<&TypeDescriptor> {
        self.base.as_deref()
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self.shape, TypeShape::ValueObject { is_abstract: true })
    }

    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.shape {
            TypeShape::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    /// Strips exactly one level of `Option`.
    pub fn unwrap_optional(&self) -> &TypeDescriptor {
        match &self.shape {
            TypeShape::Optional(inner) => inner,
            _ => self,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.shape, TypeShape::Optional(_))
    }

    /// This descriptor followed by its bases, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &TypeDescriptor> {
        core::iter::successors(Some(self), |d| d.base())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Types that can describe themselves to the classifier.
pub trait Describe: 'static {
    fn descriptor() -> TypeDescriptor;
}

impl<T: Describe> Describe for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::optional::<Option<T>>(T::descriptor())
    }
}

/// `a::b::Name<c::D>` -> `Name<c::D>`.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let head_end = full.find('<').unwrap_or(full.len());
    let start = full[..head_end].rfind("::").map(|i| i + 2).unwrap_or(0);
    &full[start..]
}
