use thiserror::Error;

use crate::raw::RawValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("message must be a string or a keyed mapping, got {0}")]
    UnsupportedShape(&'static str),
    #[error("expected message field key to be a string, got {0}")]
    NonStringKey(String),
    #[error("expected string value for message field {field}, got {kind}")]
    NonStringValue { field: String, kind: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralForm {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// One translatable unit. Keyed files assign `id` from the map key,
/// flat-list files carry it in the entry itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub hash: Option<String>,
    pub description: Option<String>,
    pub left_delim: Option<String>,
    pub right_delim: Option<String>,
    pub zero: Option<String>,
    pub one: Option<String>,
    pub two: Option<String>,
    pub few: Option<String>,
    pub many: Option<String>,
    pub other: Option<String>,
}

impl Message {
    /// Builds a message from one decoded catalog entry. A bare string is
    /// shorthand for `{other: ...}`; mappings are scanned for the reserved
    /// field names (case-insensitive), unreserved keys are ignored.
    pub fn from_raw(raw: &RawValue) -> Result<Self, MessageError> {
        match raw {
            RawValue::String(value) => Ok(Self {
                other: Some(value.clone()),
                ..Self::default()
            }),
            RawValue::Mapping(entries) => {
                let mut message = Self::default();
                for (key, value) in entries {
                    let Some(key) = key.as_str() else {
                        return Err(MessageError::NonStringKey(format!("{key:?}")));
                    };
                    match key.to_ascii_lowercase().as_str() {
                        "id" => message.id = string_field(key, value)?,
                        "hash" => message.hash = Some(string_field(key, value)?),
                        "description" => message.description = Some(string_field(key, value)?),
                        "leftdelim" => message.left_delim = Some(string_field(key, value)?),
                        "rightdelim" => message.right_delim = Some(string_field(key, value)?),
                        "zero" => message.zero = Some(string_field(key, value)?),
                        "one" => message.one = Some(string_field(key, value)?),
                        "two" => message.two = Some(string_field(key, value)?),
                        "few" => message.few = Some(string_field(key, value)?),
                        "many" => message.many = Some(string_field(key, value)?),
                        "other" => message.other = Some(string_field(key, value)?),
                        _ => {}
                    }
                }
                Ok(message)
            }
            other => Err(MessageError::UnsupportedShape(other.kind())),
        }
    }

    pub fn form_src(&self, form: PluralForm) -> Option<&str> {
        let src = match form {
            PluralForm::Zero => &self.zero,
            PluralForm::One => &self.one,
            PluralForm::Two => &self.two,
            PluralForm::Few => &self.few,
            PluralForm::Many => &self.many,
            PluralForm::Other => &self.other,
        };
        src.as_deref()
    }
}

fn string_field(field: &str, value: &RawValue) -> Result<String, MessageError> {
    match value.as_str() {
        Some(value) => Ok(value.to_owned()),
        None => Err(MessageError::NonStringValue {
            field: field.to_owned(),
            kind: value.kind(),
        }),
    }
}
