//! Hash-history route table.
//!
//! The table is built once at start-up and handed to [`super::run`]; it is
//! never mutated afterwards.

use crate::domain::BaseUrl;

use super::layout::Layout;

/// Path of the application's only route
pub const MAIN_PATH: &str = "/";
/// Name of the application's only route
pub const MAIN_NAME: &str = "main";

/// A single entry of the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<C> {
    pub path: String,
    pub name: String,
    pub component: C,
}

impl<C> Route<C> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }
}

/// History mode that keeps the route in the URL fragment (`{base}#/path`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashHistory {
    base: BaseUrl,
}

impl HashHistory {
    pub fn new(base: BaseUrl) -> Self {
        Self { base }
    }

    /// Base the history was created with, unchanged.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Build the location for a route path.
    pub fn href(&self, path: &str) -> String {
        format!("{}#{}", self.base, path)
    }

    /// Extract the route path from a location.
    ///
    /// `"/app/#/x?y=1"` yields `"/x"`. A location without a fragment, or with
    /// an empty one, points at `"/"`.
    pub fn location_path<'a>(&self, location: &'a str) -> &'a str {
        let fragment = location.split_once('#').map_or("", |(_, f)| f);
        let path = fragment.split_once('?').map_or(fragment, |(p, _)| p);
        if path.is_empty() { MAIN_PATH } else { path }
    }
}

/// Route table plus the history it resolves against
#[derive(Debug, Clone)]
pub struct Router<C> {
    history: HashHistory,
    routes: Vec<Route<C>>,
}

impl<C> Router<C> {
    pub fn new(history: HashHistory, routes: Vec<Route<C>>) -> Self {
        Self { history, routes }
    }

    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    pub fn routes(&self) -> &[Route<C>] {
        &self.routes
    }

    /// Find the route whose path matches exactly (query string ignored).
    pub fn resolve(&self, path: &str) -> Option<&Route<C>> {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        self.routes.iter().find(|route| route.path == path)
    }

    /// Resolve a full location such as `"/#/"`.
    pub fn resolve_location(&self, location: &str) -> Option<&Route<C>> {
        self.resolve(self.history.location_path(location))
    }
}

/// Build the application's route table.
pub fn create_router(base: BaseUrl) -> Router<Layout> {
    Router::new(
        HashHistory::new(base),
        vec![Route::new(MAIN_PATH, MAIN_NAME, Layout::Main)],
    )
}
