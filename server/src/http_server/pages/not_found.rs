use axum::{extract::State, http::StatusCode, response::IntoResponse};
use maud::html;

use crate::{
    http_server::templates::{base, buttons::LinkButton, MAX_WIDTH_CONTAINER_CLASSES},
    AppConfig,
};

pub(crate) async fn not_found(State(app): State<AppConfig>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        base(
            "Not Found",
            None,
            html! {
              section ."py-24 ".(MAX_WIDTH_CONTAINER_CLASSES) {
                h1 class="text-3xl font-bold mb-4" { "Page not found" }
                p class="mb-8 text-gray-600" {
                  "We couldn't find what you were looking for."
                }

                (LinkButton::secondary(html! { "Get in touch" }, app.app_url("/contact")))
              }
            },
        ),
    )
}
