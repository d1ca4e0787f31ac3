use std::net::SocketAddr;

use axum::Router;
use miette::{Context, IntoDiagnostic, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    http_server::{routes, trace::Tracer},
    AppState,
};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;

    info!(
        form_id = app_state.contact_form.form_id(),
        base_url = %app_state.app.base_url,
        "Loaded config"
    );

    run_server(routes::make_router().with_state(app_state)).await?;

    info!("Main Returning");

    Ok(())
}

pub(crate) async fn run_server(routes: Router) -> Result<()> {
    let tracer = Tracer;
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tracer)
        .on_response(tracer);

    let app = routes.layer(trace_layer);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let port: u16 = port
        .parse()
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid PORT {port}"))?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Starting server on port {}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .into_diagnostic()
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr().into_diagnostic()?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .into_diagnostic()
        .wrap_err("Failed to run server")
}
