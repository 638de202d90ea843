use msgcat_i18n_core::PluralForm;
use thiserror::Error;

// Engine errors are plain messages; the compile-once memo stores them and
// re-returns them on every later call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template compile error: {0}")]
pub struct CompileError(String);

impl CompileError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template render error: {0}")]
pub struct RenderError(String);

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("message has no {0:?} form")]
    MissingForm(PluralForm),
}
