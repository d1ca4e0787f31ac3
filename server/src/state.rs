use contact::{target::DEFAULT_FORM_ID, EntryIds, PrefillTarget};
use miette::{Context, IntoDiagnostic};
use tracing::instrument;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> miette::Result<Self> {
        let base_url =
            std::env::var("APP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .into_diagnostic()
            .wrap_err("Invalid APP_BASE_URL not parsable")?;

        Ok(Self { base_url })
    }

    pub fn app_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        url.set_path(path);

        url.into()
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_commit: Option<&'static str>,
}

impl VersionInfo {
    fn from_env() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: option_env!("GIT_SHA"),
        }
    }
}

/// Reads the Google Form id and entry ids, falling back to the production
/// form for anything unset.
#[instrument(name = "prefill_target_from_env")]
pub fn prefill_target_from_env() -> miette::Result<PrefillTarget> {
    prefill_target_from(|key| std::env::var(key).ok())
}

pub(crate) fn prefill_target_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> miette::Result<PrefillTarget> {
    let defaults = EntryIds::default();

    let entry = |key: &str, default: u64| -> miette::Result<u64> {
        match lookup(key) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .into_diagnostic()
                .wrap_err_with(|| format!("{key} must be a numeric Google Form entry id")),
            None => Ok(default),
        }
    };

    let entries = EntryIds {
        name: entry("GOOGLE_FORM_ENTRY_NAME", defaults.name)?,
        email: entry("GOOGLE_FORM_ENTRY_EMAIL", defaults.email)?,
        phone: entry("GOOGLE_FORM_ENTRY_PHONE", defaults.phone)?,
        company: entry("GOOGLE_FORM_ENTRY_COMPANY", defaults.company)?,
        message: entry("GOOGLE_FORM_ENTRY_MESSAGE", defaults.message)?,
    };

    let form_id = lookup("GOOGLE_FORM_ID").unwrap_or_else(|| DEFAULT_FORM_ID.to_string());

    Ok(PrefillTarget::new(form_id, entries)?)
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub contact_form: PrefillTarget,
    pub versions: VersionInfo,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> miette::Result<Self> {
        Ok(AppState {
            app: AppConfig::from_env()?,
            contact_form: prefill_target_from_env()?,
            versions: VersionInfo::from_env(),
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_the_production_form() {
        let target = prefill_target_from(lookup(&[])).unwrap();

        assert_eq!(target, PrefillTarget::default());
    }

    #[test]
    fn overrides_from_the_environment() {
        let target = prefill_target_from(lookup(&[
            ("GOOGLE_FORM_ID", "new-form_id"),
            ("GOOGLE_FORM_ENTRY_PHONE", " 42 "),
        ]))
        .unwrap();

        assert_eq!(target.form_id(), "new-form_id");
        assert_eq!(target.entries().phone, 42);
        assert_eq!(target.entries().name, EntryIds::default().name);
    }

    #[test]
    fn rejects_non_numeric_entry_ids() {
        let err = prefill_target_from(lookup(&[("GOOGLE_FORM_ENTRY_EMAIL", "entry.12")]))
            .unwrap_err();

        assert!(err.to_string().contains("GOOGLE_FORM_ENTRY_EMAIL"));
    }

    #[test]
    fn rejects_bad_form_ids() {
        assert!(prefill_target_from(lookup(&[("GOOGLE_FORM_ID", "")])).is_err());
        assert!(prefill_target_from(lookup(&[("GOOGLE_FORM_ID", "a/b")])).is_err());
    }

    #[test]
    fn rejects_entry_ids_shared_between_fields() {
        let name = EntryIds::default().name.to_string();

        let err = prefill_target_from(lookup(&[("GOOGLE_FORM_ENTRY_EMAIL", &name)])).unwrap_err();

        assert!(err.to_string().contains(&name));
        assert!(err.to_string().contains("more than one field"));
    }

    #[test]
    fn app_url_joins_paths() {
        let config = AppConfig {
            base_url: Url::parse("https://example.com").unwrap(),
        };

        assert_eq!(config.app_url("/contact"), "https://example.com/contact");
    }
}
