use miette::Diagnostic;
use thiserror::Error;
use url::Url;

use crate::form::{FormField, FormState};

const FORMS_BASE_URL: &str = "https://docs.google.com/forms/d/e/";

pub const DEFAULT_FORM_ID: &str = "1FAIpQLSe8q3GKvPKpvelCuW_sHlCqv4qmko-fXq9IXusYjQk_6Qfarw";

/// The numeric `entry.<id>` keys Google Forms uses for each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryIds {
    pub name: u64,
    pub email: u64,
    pub phone: u64,
    pub company: u64,
    pub message: u64,
}

impl Default for EntryIds {
    fn default() -> Self {
        Self {
            name: 274_608_449,
            email: 255_515_796,
            phone: 2_103_064_601,
            company: 1_569_469_178,
            message: 310_120_251,
        }
    }
}

impl EntryIds {
    pub fn get(&self, field: FormField) -> u64 {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Phone => self.phone,
            FormField::Company => self.company,
            FormField::Message => self.message,
        }
    }

    /// The first id shared by two fields, if any.
    pub fn duplicate(&self) -> Option<u64> {
        let ids = FormField::ALL.map(|field| self.get(field));

        ids.iter()
            .enumerate()
            .find(|&(i, id)| ids[i + 1..].contains(id))
            .map(|(_, id)| *id)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum TargetError {
    #[error("Google Form id is empty")]
    #[diagnostic(help("Set GOOGLE_FORM_ID to the id from the form's share link"))]
    EmptyFormId,
    #[error("Google Form id `{0}` contains characters that can't appear in a form id")]
    InvalidFormId(String),
    #[error("Google Form entry id {0} is used for more than one field")]
    #[diagnostic(help("Each GOOGLE_FORM_ENTRY_* variable needs its own entry id"))]
    DuplicateEntryId(u64),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Where the contact form hands its contents off to: a Google Form whose
/// questions get prefilled through the `viewform` query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefillTarget {
    form_id: String,
    entries: EntryIds,
    viewform: Url,
}

impl Default for PrefillTarget {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_ID, EntryIds::default()).expect("default form id is valid")
    }
}

impl PrefillTarget {
    pub fn new(form_id: impl Into<String>, entries: EntryIds) -> Result<Self, TargetError> {
        let form_id = form_id.into();

        if form_id.is_empty() {
            return Err(TargetError::EmptyFormId);
        }
        if !form_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TargetError::InvalidFormId(form_id));
        }
        if let Some(id) = entries.duplicate() {
            return Err(TargetError::DuplicateEntryId(id));
        }

        let viewform = Url::parse(FORMS_BASE_URL)?.join(&format!("{form_id}/viewform"))?;

        Ok(Self {
            form_id,
            entries,
            viewform,
        })
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn entries(&self) -> &EntryIds {
        &self.entries
    }

    /// The `viewform` URL with every field of `state` filled in.
    ///
    /// All five `entry.<id>` parameters are always present, empty ones included,
    /// in form order.
    pub fn prefill_url(&self, state: &FormState) -> Url {
        let mut query = String::from("usp=pp_url");

        for field in FormField::ALL {
            query.push_str(&format!(
                "&entry.{}={}",
                self.entries.get(field),
                urlencoding::encode(state.get(field))
            ));
        }

        let mut url = self.viewform.clone();
        url.set_query(Some(&query));

        url
    }
}
