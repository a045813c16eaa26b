//! Declarative macros that wire concrete types into the value-object traits.

/// Derives `PartialEq`, `Eq`, `Hash` and [`ComponentValue`](crate::ComponentValue)
/// from an existing [`ValueObject`](crate::ValueObject) implementation.
///
/// Use it with hand-written `equality_components` (for example to leave a field
/// out of equality). The type must also implement `Display`.
#[macro_export]
macro_rules! impl_value_semantics {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::ValueObject::value_equals(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::ValueObject::value_hash(self));
            }
        }

        impl $crate::ComponentValue for $t {
            fn component_eq(&self, other: &Self) -> bool {
                $crate::ValueObject::value_equals(self, other)
            }

            fn component_hash(&self) -> ::core::option::Option<i32> {
                ::core::option::Option::Some($crate::ValueObject::value_hash(self))
            }

            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Implements a value object whose equality components are the listed fields,
/// in the listed order.
///
/// ```ignore
/// value_object!(Address { street, house_number, post_code, city });
/// value_object!(GermanBankAccount: BankAccount { name, iban, bic });
/// ```
///
/// The optional `: Base` records that the type refines `Base`, which the
/// classifier follows. Renders as `Address { Main St, 5, 12345, Bremen }`.
#[macro_export]
macro_rules! value_object {
    ($t:ident $(: $base:ty)? { $($field:tt),* $(,)? }) => {
        impl $crate::Describe for $t {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::value_object::<$t>()
                    $(.derived_from(<$base as $crate::Describe>::descriptor()))?
            }
        }

        impl $crate::ValueObject for $t {
            fn equality_components(&self) -> ::std::vec::Vec<&dyn $crate::EqualityComponent> {
                ::std::vec![$(&self.$field as &dyn $crate::EqualityComponent),*]
            }
        }

        $crate::impl_value_semantics!($t);

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::ValueObject::fmt_components(self, f)
            }
        }
    };
}

/// Implements a primitive value object over a single-field tuple struct.
///
/// ```ignore
/// pub struct Age(u32);
/// primitive_value_object!(Age(u32));
///
/// pub struct Ratio(f64);
/// primitive_value_object!(partial Ratio(f64));
/// ```
///
/// Generates the value-object traits, `Display` (the wrapped value's text),
/// ordering, comparison against raw values, `From<Age> for u32` (narrowing),
/// `TryFrom<u32> for Age` (widening, validated) and `FromStr`. The `partial`
/// form only implements `PartialOrd`, for wrapped types without a total order;
/// it follows [`PrimitiveValueObject::compare`](crate::PrimitiveValueObject::compare).
#[macro_export]
macro_rules! primitive_value_object {
    (@common $t:ident, $v:ty) => {
        impl $crate::Describe for $t {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::primitive_value_object::<$t, $v>()
            }
        }

        impl $crate::ValueObject for $t {
            fn equality_components(&self) -> ::std::vec::Vec<&dyn $crate::EqualityComponent> {
                ::std::vec![&self.0 as &dyn $crate::EqualityComponent]
            }
        }

        impl $crate::PrimitiveValueObject for $t {
            type Value = $v;

            fn wrap(value: $v) -> Self {
                $t(value)
            }

            fn value(&self) -> &$v {
                &self.0
            }
        }

        $crate::impl_value_semantics!($t);

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                <$v as $crate::ComponentValue>::render(&self.0, f)
            }
        }

        impl ::core::cmp::PartialEq<$v> for $t {
            fn eq(&self, other: &$v) -> bool {
                <$v as $crate::ComponentValue>::component_eq(&self.0, other)
            }
        }

        impl ::core::cmp::PartialOrd<$v> for $t {
            fn partial_cmp(&self, other: &$v) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::cmp::PartialOrd::partial_cmp(&self.0, other)
            }
        }

        impl ::core::convert::From<$t> for $v {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::convert::TryFrom<$v> for $t {
            type Error = $crate::ValueObjectError;

            fn try_from(value: $v) -> ::core::result::Result<Self, Self::Error> {
                <$t as $crate::PrimitiveValueObject>::create(value)
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::ValueObjectError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::primitive::parse_primitive::<$t>(s)
            }
        }
    };
    (partial $t:ident($v:ty)) => {
        $crate::primitive_value_object!(@common $t, $v);

        impl ::core::cmp::PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some($crate::PrimitiveValueObject::compare(
                    self,
                    ::core::option::Option::Some(other),
                ))
            }
        }
    };
    ($t:ident($v:ty)) => {
        $crate::primitive_value_object!(@common $t, $v);

        impl ::core::cmp::Ord for $t {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.0, &other.0)
            }
        }

        impl ::core::cmp::PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }
    };
}

/// Makes a fieldless enum an allowed wrapped type: an `Enumeration` scalar
/// carried as its variant name.
///
/// The enum must derive `Debug`, `Clone`, `PartialEq` and `PartialOrd` (plus
/// `Eq`/`Ord` to be wrapped by the total-order form of
/// [`primitive_value_object!`]).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// pub enum Currency { Euro, Dollar }
/// enumeration!(Currency { Euro, Dollar });
/// ```
#[macro_export]
macro_rules! enumeration {
    ($t:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Enumeration for $t {
            const VARIANT_NAMES: &'static [&'static str] = &[$(::core::stringify!($variant)),+];

            fn variant_name(&self) -> &'static str {
                match self {
                    $($t::$variant => ::core::stringify!($variant),)+
                }
            }

            fn from_variant_name(name: &str) -> ::core::option::Option<Self> {
                $(
                    if name == ::core::stringify!($variant) {
                        return ::core::option::Option::Some($t::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }

        impl $crate::Describe for $t {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::scalar::<$t>($crate::ScalarKind::Enumeration)
            }
        }

        impl $crate::ComponentValue for $t {
            fn component_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn component_hash(&self) -> ::core::option::Option<i32> {
                ::core::option::Option::Some($crate::Enumeration::ordinal(self))
            }

            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Enumeration::variant_name(self))
            }
        }

        impl $crate::RawConvert for $t {
            fn into_raw(self) -> $crate::RawValue {
                $crate::RawValue::Enum(
                    ::std::string::ToString::to_string($crate::Enumeration::variant_name(&self)),
                )
            }

            fn try_from_raw(raw: $crate::RawValue) -> ::core::result::Result<Self, $crate::RawValue> {
                match raw {
                    $crate::RawValue::Enum(name) => {
                        match <$t as $crate::Enumeration>::from_variant_name(&name) {
                            ::core::option::Option::Some(value) => ::core::result::Result::Ok(value),
                            ::core::option::Option::None => {
                                ::core::result::Result::Err($crate::RawValue::Enum(name))
                            }
                        }
                    }
                    other => ::core::result::Result::Err(other),
                }
            }

            fn parse_raw(input: &str) -> $crate::ValueObjectResult<Self> {
                <$t as $crate::Enumeration>::from_variant_name(input.trim()).ok_or_else(|| {
                    $crate::ValueObjectError::parse(
                        ::core::any::type_name::<$t>(),
                        input,
                        "unknown variant",
                    )
                })
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Enumeration::variant_name(self))
            }
        }
    };
}
