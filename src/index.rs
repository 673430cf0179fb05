use crate::{App, AppError};
use askama::Template;
use axum::{extract::State, response::Html};
use std::sync::Arc;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    packages: Vec<IndexEntry>,
}

struct IndexEntry {
    name: String,
    repo: String,
}

impl App {
    /// Function that is used to register to the router for `/`
    pub async fn get_index(State(state): State<Arc<Self>>) -> Result<Html<String>, AppError> {
        let packages = state
            .packages()
            .iter()
            .map(|(name, package)| IndexEntry {
                name: name.clone(),
                repo: package.repo.clone(),
            })
            .collect();
        let template = IndexTemplate { packages };
        Ok(Html(template.render()?))
    }
}
