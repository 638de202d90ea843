use std::collections::BTreeMap;

use crate::error::{ParseError, ParseResult};
use crate::locale::LocaleTag;
use crate::message::Message;
use crate::raw::RawValue;

pub type DecodeError = Box<dyn std::error::Error + Send + Sync>;

/// Decodes one catalog file's bytes into the format-agnostic tree.
pub type DecodeFn = Box<dyn Fn(&[u8]) -> Result<RawValue, DecodeError> + Send + Sync>;

/// Format name (as inferred from the file name, e.g. `"json"`) to decoder.
pub type DecoderRegistry = BTreeMap<String, DecodeFn>;

#[derive(Clone, Debug, PartialEq)]
pub struct MessageFile {
    pub path: String,
    pub tag: LocaleTag,
    pub format: String,
    pub messages: Vec<Message>,
}

/// Parses one catalog file already read into memory. Locale tag and format
/// come from `path` (see [`parse_path`]); the matching decoder is looked up
/// in `decoders`. Any failure aborts the whole file, no partial results.
pub fn parse_message_file_bytes(
    buf: &[u8],
    path: &str,
    decoders: &DecoderRegistry,
) -> ParseResult<MessageFile> {
    let (locale, format) = parse_path(path);
    let tag = LocaleTag::parse(locale).map_err(|source| ParseError::MalformedLocale {
        path: path.to_owned(),
        source,
    })?;
    let mut file = MessageFile {
        path: path.to_owned(),
        tag,
        format: format.to_owned(),
        messages: Vec::new(),
    };
    if buf.is_empty() {
        return Ok(file);
    }
    let decode = decoders
        .get(format)
        .ok_or_else(|| ParseError::UnregisteredFormat(format.to_owned()))?;
    let raw = decode(buf).map_err(ParseError::Decode)?;
    file.messages = match raw {
        RawValue::Mapping(entries) => {
            let mut messages = Vec::with_capacity(entries.len());
            for (key, value) in &entries {
                let Some(id) = key.as_str() else {
                    return Err(ParseError::NonStringKey(format!("{key:?}")));
                };
                let mut message = Message::from_raw(value)?;
                message.id = id.to_owned();
                messages.push(message);
            }
            messages
        }
        // Flat-list layout from the v1 file format: ids travel inside each
        // entry instead of keying it.
        RawValue::Sequence(elements) => {
            let mut messages = Vec::with_capacity(elements.len());
            for element in &elements {
                messages.push(Message::from_raw(element)?);
            }
            messages
        }
        other => return Err(ParseError::UnsupportedShape(other.kind())),
    };
    Ok(file)
}

/// Splits a catalog file path into its locale and format parts. The
/// rightmost dot suffix of the file name is the format; whatever sits
/// between the previous boundary (dot, separator, or string start) and that
/// dot is the locale. Directory names never contribute.
///
/// `"active.en.toml"` gives `("en", "toml")`, `"en-US.json"` gives
/// `("en-US", "json")`, `"messages"` gives `("", "")`.
pub fn parse_path(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    let mut format_start = None;
    for i in (0..bytes.len()).rev() {
        if is_path_separator(bytes[i]) {
            return match format_start {
                Some(start) => (&path[i + 1..start], &path[start + 1..]),
                None => ("", ""),
            };
        }
        if bytes[i] == b'.' {
            match format_start {
                Some(start) => return (&path[i + 1..start], &path[start + 1..]),
                None => format_start = Some(i),
            }
        }
    }
    match format_start {
        Some(start) => (&path[..start], &path[start + 1..]),
        None => ("", ""),
    }
}

fn is_path_separator(byte: u8) -> bool {
    byte == b'/' || (cfg!(windows) && byte == b'\\')
}
