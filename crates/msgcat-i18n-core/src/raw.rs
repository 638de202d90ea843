use core::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

/// Format-agnostic decoded tree. Mapping keys are values themselves, which
/// keeps decoders with untyped keys (YAML) representable; mapping entries
/// keep document order.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<RawValue>),
    Mapping(Vec<(RawValue, RawValue)>),
}

impl RawValue {
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::Sequence(_) => "sequence",
            RawValue::Mapping(_) => "mapping",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawValueVisitor;

        impl<'de> Visitor<'de> for RawValueVisitor {
            type Value = RawValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a catalog value")
            }

            fn visit_bool<E: Error>(self, value: bool) -> Result<RawValue, E> {
                Ok(RawValue::Bool(value))
            }

            fn visit_i64<E: Error>(self, value: i64) -> Result<RawValue, E> {
                Ok(RawValue::Integer(value))
            }

            fn visit_u64<E: Error>(self, value: u64) -> Result<RawValue, E> {
                match i64::try_from(value) {
                    Ok(value) => Ok(RawValue::Integer(value)),
                    Err(_) => Ok(RawValue::Float(value as f64)),
                }
            }

            fn visit_f64<E: Error>(self, value: f64) -> Result<RawValue, E> {
                Ok(RawValue::Float(value))
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<RawValue, E> {
                Ok(RawValue::String(value.to_owned()))
            }

            fn visit_string<E: Error>(self, value: String) -> Result<RawValue, E> {
                Ok(RawValue::String(value))
            }

            fn visit_unit<E: Error>(self) -> Result<RawValue, E> {
                Ok(RawValue::Null)
            }

            fn visit_none<E: Error>(self) -> Result<RawValue, E> {
                Ok(RawValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<RawValue, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RawValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut elements = Vec::new();
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(RawValue::Sequence(elements))
            }

            fn visit_map<A>(self, mut map: A) -> Result<RawValue, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(RawValue::Mapping(entries))
            }
        }

        deserializer.deserialize_any(RawValueVisitor)
    }
}
