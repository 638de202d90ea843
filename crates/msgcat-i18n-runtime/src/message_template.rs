use std::collections::BTreeMap;

use msgcat_i18n_core::{Message, PluralForm};

use crate::error::TemplateError;
use crate::template::{Template, TemplateEngine};

pub const DEFAULT_LEFT_DELIM: &str = "{{";
pub const DEFAULT_RIGHT_DELIM: &str = "}}";

const FORMS: [PluralForm; 6] = [
    PluralForm::Zero,
    PluralForm::One,
    PluralForm::Two,
    PluralForm::Few,
    PluralForm::Many,
    PluralForm::Other,
];

/// A message plus one lazy [`Template`] per populated plural form. Which
/// form applies to a request is the caller's decision; rendering uses the
/// message's own delimiters when it declares them.
#[derive(Debug)]
pub struct MessageTemplate {
    message: Message,
    templates: BTreeMap<PluralForm, Template>,
}

impl MessageTemplate {
    pub fn new(message: Message) -> Self {
        let mut templates = BTreeMap::new();
        for form in FORMS {
            if let Some(src) = message.form_src(form) {
                templates.insert(form, Template::new(src));
            }
        }
        Self { message, templates }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn has_form(&self, form: PluralForm) -> bool {
        self.templates.contains_key(&form)
    }

    pub fn render(
        &mut self,
        form: PluralForm,
        engine: &dyn TemplateEngine,
        args: &BTreeMap<String, String>,
    ) -> Result<String, TemplateError> {
        let left_delim = self
            .message
            .left_delim
            .as_deref()
            .unwrap_or(DEFAULT_LEFT_DELIM);
        let right_delim = self
            .message
            .right_delim
            .as_deref()
            .unwrap_or(DEFAULT_RIGHT_DELIM);
        let template = self
            .templates
            .get_mut(&form)
            .ok_or(TemplateError::MissingForm(form))?;
        template.render(engine, left_delim, right_delim, args)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use msgcat_i18n_core::{Message, PluralForm};

    use super::MessageTemplate;
    use crate::engine::BasicEngine;
    use crate::error::TemplateError;

    fn args(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn renders_populated_forms() {
        let message = Message {
            id: "cats".to_owned(),
            one: Some("{{count}} cat".to_owned()),
            other: Some("{{count}} cats".to_owned()),
            ..Message::default()
        };
        let mut template = MessageTemplate::new(message);
        assert!(template.has_form(PluralForm::One));
        assert!(!template.has_form(PluralForm::Few));

        let output = template
            .render(PluralForm::One, &BasicEngine, &args(&[("count", "1")]))
            .expect("render");
        assert_eq!(output, "1 cat");
        let output = template
            .render(PluralForm::Other, &BasicEngine, &args(&[("count", "7")]))
            .expect("render");
        assert_eq!(output, "7 cats");
    }

    #[test]
    fn missing_form_is_an_error() {
        let message = Message {
            id: "plain".to_owned(),
            other: Some("hi".to_owned()),
            ..Message::default()
        };
        let mut template = MessageTemplate::new(message);
        let err = template
            .render(PluralForm::Few, &BasicEngine, &BTreeMap::new())
            .expect_err("missing form");
        assert_eq!(err, TemplateError::MissingForm(PluralForm::Few));
    }

    #[test]
    fn message_delimiters_override_defaults() {
        let message = Message {
            id: "custom".to_owned(),
            left_delim: Some("<".to_owned()),
            right_delim: Some(">".to_owned()),
            other: Some("Hi <name>".to_owned()),
            ..Message::default()
        };
        let mut template = MessageTemplate::new(message);
        let output = template
            .render(PluralForm::Other, &BasicEngine, &args(&[("name", "Ada")]))
            .expect("render");
        assert_eq!(output, "Hi Ada");
    }

    #[test]
    fn plain_form_renders_verbatim() {
        let message = Message {
            id: "plain".to_owned(),
            other: Some("no placeholders here".to_owned()),
            ..Message::default()
        };
        let mut template = MessageTemplate::new(message);
        let output = template
            .render(PluralForm::Other, &BasicEngine, &BTreeMap::new())
            .expect("render");
        assert_eq!(output, "no placeholders here");
    }
}
