#![forbid(unsafe_code)]

mod decoders;
mod engine;
mod error;
mod message_template;
mod template;

pub use crate::decoders::{default_registry, json_decoder, toml_decoder, yaml_decoder};
pub use crate::engine::BasicEngine;
pub use crate::error::{CompileError, RenderError, TemplateError};
pub use crate::message_template::{DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM, MessageTemplate};
pub use crate::template::{CompiledTemplate, Template, TemplateEngine};
