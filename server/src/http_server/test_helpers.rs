use axum::{body::Body, http::Response, Router};
use contact::PrefillTarget;
use url::Url;

use crate::{state::VersionInfo, AppConfig, AppState};

pub fn create_test_app() -> Router {
    let state = AppState {
        app: AppConfig {
            base_url: Url::parse("http://localhost:3000").unwrap(),
        },
        contact_form: PrefillTarget::default(),
        versions: VersionInfo {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: Some("test-commit"),
        },
    };

    crate::http_server::routes::make_router().with_state(state)
}

pub async fn response_body_string(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(body_bytes.to_vec()).unwrap()
}
