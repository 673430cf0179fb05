use crate::{AppError, Config, Package};
use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "package.html")]
struct PackageTemplate {
    repo: String,
    canonical_url: String,
    godoc_url: String,
}

/// Route context for one configured package name, built once at startup and
/// closed over by that package's handlers.
#[derive(Debug, Clone)]
pub(crate) struct PackageRoute {
    repo: String,
    canonical_url: String,
    docs_url: String,
}

impl PackageRoute {
    pub(crate) fn new(name: &str, package: &Package, config: &Config) -> Self {
        Self {
            repo: package.repo.clone(),
            canonical_url: format!("{}/{}", config.url, name),
            docs_url: config.docs_url.clone(),
        }
    }

    /// Renders the import-redirection page. `sub_path` is the wildcard
    /// remainder of the request path, either empty or starting with `/`; it
    /// is appended verbatim to the documentation URL.
    pub(crate) async fn render(self, sub_path: String) -> Result<Html<String>, AppError> {
        let godoc_url = format!("{}/{}{}", self.docs_url, self.canonical_url, sub_path);
        tracing::trace!(canonical_url = %self.canonical_url, godoc_url = %godoc_url, "serving package page");
        let template = PackageTemplate {
            repo: self.repo,
            canonical_url: self.canonical_url,
            godoc_url,
        };
        Ok(Html(template.render()?))
    }
}
