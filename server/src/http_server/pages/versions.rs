use axum::extract::State;
use maud::{html, Markup};

use crate::AppState;

pub(crate) async fn versions(State(app): State<AppState>) -> Markup {
    html! {
      p { "Vyapaar Groww contact" }
      p { "Version: " (app.versions.version) }
      p { "Git Commit: " (app.versions.git_commit.unwrap_or("unknown")) }
      p { "Google Form: " (app.contact_form.form_id()) }
    }
}
