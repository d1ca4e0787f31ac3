use axum::{
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};

use super::pages;
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/_", get(pages::versions::versions))
        .route("/", get(redirect_to_contact))
        .route(
            "/contact",
            get(pages::contact::contact_get).post(pages::contact::contact_post),
        )
        .route("/contact/prefill", get(pages::contact::prefill_redirect))
        .fallback(pages::not_found::not_found)
}

async fn redirect_to_contact() -> impl IntoResponse {
    Redirect::to("/contact")
}
