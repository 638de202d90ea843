use thiserror::Error;

use crate::locale::LocaleError;
use crate::message::MessageError;
use crate::parse::DecodeError;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed locale in {path}: {source}")]
    MalformedLocale { path: String, source: LocaleError },
    #[error("no decoder registered for format {0}")]
    UnregisteredFormat(String),
    #[error("decode failed: {0}")]
    Decode(DecodeError),
    #[error("unsupported decoded shape: got {0}")]
    UnsupportedShape(&'static str),
    #[error("expected string key, got {0}")]
    NonStringKey(String),
    #[error(transparent)]
    Message(#[from] MessageError),
}

pub type ParseResult<T> = Result<T, ParseError>;
