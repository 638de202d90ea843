#![forbid(unsafe_code)]

mod error;
mod locale;
mod message;
mod parse;
mod raw;

pub use crate::error::{ParseError, ParseResult};
pub use crate::locale::{LocaleError, LocaleTag};
pub use crate::message::{Message, MessageError, PluralForm};
pub use crate::parse::{
    DecodeError, DecodeFn, DecoderRegistry, MessageFile, parse_message_file_bytes, parse_path,
};
pub use crate::raw::RawValue;
