use std::{fmt::Display, str::FromStr};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{environment::Environment, redirect, target::PrefillTarget};

/// One of the five inputs on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl FormField {
    /// Every field, in the order they appear in the prefill URL.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::Message,
    ];

    /// The `name` attribute of the matching HTML input.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Company => "company",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Contact Number",
            FormField::Company => "Company",
            FormField::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.input_name())
    }
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
#[error("Unknown contact form field `{0}`")]
#[diagnostic(help("Expected one of name, email, phone, company or message"))]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.input_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The current contents of the contact form.
///
/// Missing keys in a submitted body deserialize to empty strings, so a
/// `FormState` always carries all five fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    /// Replaces the value of `field`, leaving the other four alone.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        };

        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields that are still empty, in form order.
    ///
    /// Matches the browser's `required` check: a value of only whitespace
    /// counts as filled in.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }
}

/// The contact form as owned by the page: its current state plus where a
/// submission gets sent.
#[derive(Debug, Clone)]
pub struct ContactForm {
    state: FormState,
    target: PrefillTarget,
}

impl ContactForm {
    pub fn new(target: PrefillTarget) -> Self {
        Self::with_state(target, FormState::default())
    }

    pub fn with_state(target: PrefillTarget, state: FormState) -> Self {
        Self { state, target }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn target(&self) -> &PrefillTarget {
        &self.target
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.update_field(field, value);
    }

    /// Hands the current contents off to the external form and starts over
    /// with an empty form.
    pub fn submit(&mut self, env: &mut impl Environment) {
        redirect::submit(&self.target, &self.state, env);

        self.state.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::environment::test::{Effect, RecordingEnvironment};

    #[test]
    fn starts_empty() {
        let form = ContactForm::new(PrefillTarget::default());

        assert!(form.state().is_empty());
        for field in FormField::ALL {
            assert_eq!(form.state().get(field), "");
        }
    }

    #[test]
    fn update_only_touches_one_field() {
        let mut state = FormState::default();

        state.update_field(FormField::Email, "jane@x.com");

        assert_eq!(state.email, "jane@x.com");
        assert_eq!(state.name, "");
        assert_eq!(state.phone, "");
        assert_eq!(state.company, "");
        assert_eq!(state.message, "");
    }

    #[test]
    fn last_write_wins_regardless_of_order() {
        let writes = [
            (FormField::Message, "first"),
            (FormField::Name, "J"),
            (FormField::Company, "Acme"),
            (FormField::Name, "Ja"),
            (FormField::Message, "Hello there"),
            (FormField::Name, "Jane Doe"),
            (FormField::Phone, "+91"),
            (FormField::Phone, "+911234567890"),
            (FormField::Email, "jane@x.com"),
        ];

        let mut forwards = FormState::default();
        for (field, value) in writes {
            forwards.update_field(field, value);
        }

        // Same final writes per field, interleaved differently.
        let mut shuffled = FormState::default();
        for (field, value) in [
            (FormField::Phone, "+911234567890"),
            (FormField::Name, "Jane Doe"),
            (FormField::Email, "jane@x.com"),
            (FormField::Message, "Hello there"),
            (FormField::Company, "Acme"),
        ] {
            shuffled.update_field(field, value);
        }

        assert_eq!(forwards, shuffled);
        assert_eq!(
            forwards,
            FormState {
                name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                phone: "+911234567890".into(),
                company: "Acme".into(),
                message: "Hello there".into(),
            }
        );
    }

    #[test]
    fn field_names_parse() {
        for field in FormField::ALL {
            assert_eq!(field.input_name().parse::<FormField>(), Ok(field));
        }

        assert_eq!(
            "subject".parse::<FormField>(),
            Err(UnknownField("subject".to_string()))
        );
    }

    #[test]
    fn missing_required_ignores_optional_fields() {
        let mut state = FormState::default();

        assert_eq!(
            state.missing_required(),
            vec![FormField::Name, FormField::Email, FormField::Message]
        );

        state.update_field(FormField::Name, "Jane");

        assert_eq!(
            state.missing_required(),
            vec![FormField::Email, FormField::Message]
        );

        state.update_field(FormField::Email, "jane@x.com");
        state.update_field(FormField::Message, "Hi");

        assert!(state.missing_required().is_empty());
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let mut state = FormState::default();
        state.update_field(FormField::Name, "   ");
        state.update_field(FormField::Email, "jane@x.com");
        state.update_field(FormField::Message, "\n");

        assert!(state.missing_required().is_empty());
    }

    #[test]
    fn submit_resets_the_state() {
        let mut form = ContactForm::new(PrefillTarget::default());
        form.update_field(FormField::Name, "Jane Doe");
        form.update_field(FormField::Email, "jane@x.com");
        form.update_field(FormField::Message, "Hello there");

        let mut env = RecordingEnvironment::default();
        form.submit(&mut env);

        assert_eq!(form.state(), &FormState::default());
        assert_eq!(env.effects.len(), 2);
        assert!(matches!(env.effects[0], Effect::Opened(_)));
    }

    #[test]
    fn deserializes_partial_bodies() {
        let state: FormState =
            serde_urlencoded_like(&[("name", "Jane"), ("message", "Hi")]);

        assert_eq!(state.name, "Jane");
        assert_eq!(state.message, "Hi");
        assert_eq!(state.phone, "");
        assert_eq!(state.company, "");
    }

    // Builds a FormState through serde the same way a decoded form body does.
    fn serde_urlencoded_like(pairs: &[(&str, &str)]) -> FormState {
        use serde::de::value::{Error, MapDeserializer};

        let de: MapDeserializer<'_, _, Error> = MapDeserializer::new(pairs.iter().copied());

        FormState::deserialize(de).unwrap()
    }
}
