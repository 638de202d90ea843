use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CompileError, RenderError, TemplateError};

/// Turns one template source and a delimiter pair into an executable
/// artifact.
pub trait TemplateEngine {
    fn compile(
        &self,
        src: &str,
        left_delim: &str,
        right_delim: &str,
    ) -> Result<Box<dyn CompiledTemplate>, CompileError>;
}

pub trait CompiledTemplate: fmt::Debug + Send + Sync {
    fn render(&self, args: &BTreeMap<String, String>) -> Result<String, RenderError>;
}

#[derive(Debug)]
enum CompileState {
    NotAttempted,
    /// The source contains no left delimiter: not a template at all.
    /// Rendering returns the source verbatim.
    Plain,
    Compiled(Box<dyn CompiledTemplate>),
    Failed(CompileError),
}

/// Lazily compiled form of one message's template source. Compilation runs
/// at most once per instance; both the artifact and a compile failure are
/// memoized.
#[derive(Debug)]
pub struct Template {
    src: String,
    state: CompileState,
}

impl Template {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            state: CompileState::NotAttempted,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self.state, CompileState::Compiled(_))
    }

    /// Whether any compilation attempt, including the not-a-template
    /// short-circuit, has been recorded.
    pub fn is_attempted(&self) -> bool {
        !matches!(self.state, CompileState::NotAttempted)
    }

    /// Compiles the source on first call and memoizes the outcome. Sources
    /// without the left delimiter are recorded as plain text and the engine
    /// is never invoked.
    ///
    /// The memo is keyed by instance, not by delimiter pair: once any
    /// result is recorded, later calls return it unchanged even when passed
    /// different delimiters. Callers must keep one delimiter pair per
    /// instance over its lifetime.
    pub fn ensure_compiled(
        &mut self,
        engine: &dyn TemplateEngine,
        left_delim: &str,
        right_delim: &str,
    ) -> Result<(), CompileError> {
        match &self.state {
            CompileState::NotAttempted => {}
            CompileState::Plain | CompileState::Compiled(_) => return Ok(()),
            CompileState::Failed(err) => return Err(err.clone()),
        }
        if !self.src.contains(left_delim) {
            self.state = CompileState::Plain;
            return Ok(());
        }
        match engine.compile(&self.src, left_delim, right_delim) {
            Ok(compiled) => {
                self.state = CompileState::Compiled(compiled);
                Ok(())
            }
            Err(err) => {
                self.state = CompileState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Compiles if needed, then renders. Plain sources come back verbatim.
    pub fn render(
        &mut self,
        engine: &dyn TemplateEngine,
        left_delim: &str,
        right_delim: &str,
        args: &BTreeMap<String, String>,
    ) -> Result<String, TemplateError> {
        self.ensure_compiled(engine, left_delim, right_delim)?;
        match &self.state {
            CompileState::Compiled(compiled) => Ok(compiled.render(args)?),
            _ => Ok(self.src.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::BTreeMap;

    use super::{CompiledTemplate, Template, TemplateEngine};
    use crate::error::{CompileError, RenderError};

    #[derive(Debug, Default)]
    struct CountingEngine {
        calls: Cell<usize>,
        fail: bool,
    }

    impl TemplateEngine for CountingEngine {
        fn compile(
            &self,
            src: &str,
            left_delim: &str,
            right_delim: &str,
        ) -> Result<Box<dyn CompiledTemplate>, CompileError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(CompileError::new("stub failure"));
            }
            Ok(Box::new(StubTemplate {
                output: format!("compiled({src})[{left_delim}{right_delim}]"),
            }))
        }
    }

    #[derive(Debug)]
    struct StubTemplate {
        output: String,
    }

    impl CompiledTemplate for StubTemplate {
        fn render(&self, _args: &BTreeMap<String, String>) -> Result<String, RenderError> {
            Ok(self.output.clone())
        }
    }

    #[test]
    fn compiles_exactly_once() {
        let engine = CountingEngine::default();
        let mut template = Template::new("hello {{name}}");
        template.ensure_compiled(&engine, "{{", "}}").expect("first");
        template.ensure_compiled(&engine, "{{", "}}").expect("second");
        assert_eq!(engine.calls.get(), 1);
        assert!(template.is_compiled());
    }

    #[test]
    fn plain_source_never_invokes_engine() {
        let engine = CountingEngine::default();
        let mut template = Template::new("hello");
        template.ensure_compiled(&engine, "{{", "}}").expect("plain");
        assert_eq!(engine.calls.get(), 0);
        assert!(!template.is_compiled());
        assert!(template.is_attempted());

        let rendered = template
            .render(&engine, "{{", "}}", &BTreeMap::new())
            .expect("render");
        assert_eq!(rendered, "hello");
    }

    #[test]
    fn memo_ignores_changed_delimiters() {
        let engine = CountingEngine::default();
        let mut template = Template::new("hello [name]");
        template.ensure_compiled(&engine, "[", "]").expect("first");
        assert!(template.is_compiled());

        // A second call with a different pair reuses the stale memo.
        template.ensure_compiled(&engine, "{{", "}}").expect("stale");
        assert_eq!(engine.calls.get(), 1);
        let rendered = template
            .render(&engine, "{{", "}}", &BTreeMap::new())
            .expect("render");
        assert_eq!(rendered, "compiled(hello [name])[[]]");
    }

    #[test]
    fn failure_is_memoized() {
        let engine = CountingEngine {
            fail: true,
            ..CountingEngine::default()
        };
        let mut template = Template::new("hello {{name}}");
        let first = template
            .ensure_compiled(&engine, "{{", "}}")
            .expect_err("first");
        let second = template
            .ensure_compiled(&engine, "((", "))")
            .expect_err("second");
        assert_eq!(first, second);
        assert_eq!(engine.calls.get(), 1);
        assert!(!template.is_compiled());
        assert!(template.is_attempted());
    }

    #[test]
    fn render_reports_memoized_failure() {
        let engine = CountingEngine {
            fail: true,
            ..CountingEngine::default()
        };
        let mut template = Template::new("hello {{name}}");
        template
            .render(&engine, "{{", "}}", &BTreeMap::new())
            .expect_err("render fails");
        assert_eq!(engine.calls.get(), 1);
    }
}
