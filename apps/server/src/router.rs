use axum::Router;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;
use isomer_kernel::prelude::{AppState, system_router};
use isomer_ui::RenderMode;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Assembles the application router.
///
/// Static assets are tried first; any request without a matching file
/// falls through to the catch-all render, so the static layer never
/// produces its own 404.
pub(crate) fn init(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.storage.static_dir).fallback(get(render_page));

    Router::new()
        .merge(system_router())
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

/// Catch-all handler: renders the component tree seeded with the request
/// path into the document shell. Always answers 200; an unknown path
/// renders the navigation shell with an empty main region.
async fn render_page(uri: Uri) -> Html<String> {
    Html(isomer_ui::render::render_document(uri.path(), RenderMode::Ssr))
}
