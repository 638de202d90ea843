use std::collections::BTreeMap;

use crate::error::{CompileError, RenderError};
use crate::template::{CompiledTemplate, TemplateEngine};

/// Single-pass placeholder interpolation.
///
/// `Hello {{ name }}` compiles into literal and placeholder segments;
/// rendering substitutes placeholders from the args map in one pass, with
/// no recursive substitution. A placeholder with no matching arg is emitted
/// back verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEngine;

#[derive(Debug)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug)]
struct BasicTemplate {
    segments: Vec<Segment>,
    left_delim: String,
    right_delim: String,
}

impl TemplateEngine for BasicEngine {
    fn compile(
        &self,
        src: &str,
        left_delim: &str,
        right_delim: &str,
    ) -> Result<Box<dyn CompiledTemplate>, CompileError> {
        if left_delim.is_empty() || right_delim.is_empty() {
            return Err(CompileError::new("delimiters must be non-empty"));
        }
        let mut segments = Vec::new();
        let mut rest = src;
        while let Some(start) = rest.find(left_delim) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_owned()));
            }
            let after = &rest[start + left_delim.len()..];
            let Some(end) = after.find(right_delim) else {
                return Err(CompileError::new(format!(
                    "unclosed placeholder after {left_delim:?}"
                )));
            };
            let name = after[..end].trim();
            if name.is_empty() {
                return Err(CompileError::new("empty placeholder"));
            }
            segments.push(Segment::Placeholder(name.to_owned()));
            rest = &after[end + right_delim.len()..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }
        Ok(Box::new(BasicTemplate {
            segments,
            left_delim: left_delim.to_owned(),
            right_delim: right_delim.to_owned(),
        }))
    }
}

impl CompiledTemplate for BasicTemplate {
    fn render(&self, args: &BTreeMap<String, String>) -> Result<String, RenderError> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => match args.get(name) {
                    Some(value) => output.push_str(value),
                    None => {
                        output.push_str(&self.left_delim);
                        output.push_str(name);
                        output.push_str(&self.right_delim);
                    }
                },
            }
        }
        Ok(output)
    }
}
