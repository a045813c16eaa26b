//! `#[serde(with = ...)]` modules for primitive value object fields.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Person {
//!     #[serde(with = "valuekit_json::primitive")]
//!     age: Age,
//!     #[serde(with = "valuekit_json::option", default)]
//!     nickname: Option<Nickname>,
//! }
//! ```

/// A required field: written as its raw value. On read, `null` is rejected
/// unless the wrapped type is itself an `Option`.
pub mod primitive {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use valuekit_core::{NullHandling, PrimitiveValueObject, RawConvert, extract_raw_value};

    use crate::convert::raw_to_json;
    use crate::converter::from_json_with;
    use crate::options::JsonOptions;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: PrimitiveValueObject,
        T::Value: RawConvert,
        S: Serializer,
    {
        raw_to_json(&extract_raw_value(value)).serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: PrimitiveValueObject,
        T::Value: RawConvert,
        D: Deserializer<'de>,
    {
        let json = Value::deserialize(deserializer)?;
        from_json_with::<T>(&json, JsonOptions::new(NullHandling::Reject))
            .map_err(<D::Error as serde::de::Error>::custom)?
            .ok_or_else(|| <D::Error as serde::de::Error>::custom("null is not a valid value"))
    }
}

/// An optional field: `None` is `null`, and `null` reads as `None`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use valuekit_core::{NullHandling, PrimitiveValueObject, RawConvert, extract_raw_value};

    use crate::convert::raw_to_json;
    use crate::converter::from_json_with;
    use crate::options::JsonOptions;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: PrimitiveValueObject,
        T::Value: RawConvert,
        S: Serializer,
    {
        match value {
            Some(value) => raw_to_json(&extract_raw_value(value)).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: PrimitiveValueObject,
        T::Value: RawConvert,
        D: Deserializer<'de>,
    {
        let json = Value::deserialize(deserializer)?;
        if json.is_null() {
            return Ok(None);
        }
        from_json_with::<T>(&json, JsonOptions::new(NullHandling::Propagate))
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}
