use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use package::PackageRoute;
use serde::Deserialize;
use std::{collections::BTreeMap, sync::Arc};
use tower_http::catch_panic::CatchPanicLayer;

pub mod fallback;
pub mod index;
pub mod package;

#[derive(Debug)]
pub struct App {
    config: Config,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base host/path that canonical import paths are composed from.
    pub url: String,
    /// Base URL of the documentation viewer that browsers are sent to.
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
    pub packages: BTreeMap<String, Package>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub repo: String,
}

fn default_docs_url() -> String {
    "https://godoc.org".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CACHE_CONTROL, "no-cache")],
            self.to_string(),
        )
            .into_response()
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn packages(&self) -> &BTreeMap<String, Package> {
        &self.config.packages
    }

    pub fn create_router(self) -> Router {
        let mut router = Router::new().route("/", get(Self::get_index));

        // One route context per configured package, bound at startup. The
        // wildcard does not match the bare or trailing-slash forms, so each
        // gets its own route.
        for (name, package) in self.packages() {
            let route = PackageRoute::new(name, package, &self.config);
            let exact = route.clone();
            let slash = route.clone();
            router = router
                .route(&format!("/{name}"), get(move || exact.render(String::new())))
                .route(
                    &format!("/{name}/"),
                    get(move || slash.render("/".to_string())),
                )
                .route(
                    &format!("/{name}/{{*path}}"),
                    get(move |Path(path): Path<String>| route.render(format!("/{path}"))),
                );
        }

        router
            .fallback(fallback::not_found)
            .method_not_allowed_fallback(fallback::method_not_allowed)
            .layer(CatchPanicLayer::custom(fallback::handle_panic))
            .with_state(Arc::new(self))
    }
}
