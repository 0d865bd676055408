//! Static front-end assets: the index page at `/` and the `/static/` tree.

use axum::routing::{get_service, MethodRouter};
use tower_http::services::{ServeDir, ServeFile};

use crate::state::{AppConfig, AppState};

/// `GET /` serves `index.html` from the views directory.
pub fn index_page(config: &AppConfig) -> MethodRouter<AppState> {
    get_service(ServeFile::new(config.index_page()))
}

/// Files under the static directory, addressed relative to the mount point.
/// Missing files are a plain 404.
pub fn static_files(config: &AppConfig) -> MethodRouter {
    get_service(ServeDir::new(&config.static_dir))
}
