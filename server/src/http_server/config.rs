use axum::extract::FromRef;
use contact::PrefillTarget;

use crate::{AppConfig, AppState};

impl FromRef<AppState> for AppConfig {
    fn from_ref(config: &AppState) -> Self {
        config.app.clone()
    }
}

impl FromRef<AppState> for PrefillTarget {
    fn from_ref(config: &AppState) -> Self {
        config.contact_form.clone()
    }
}
