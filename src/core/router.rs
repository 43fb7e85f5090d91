use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Contact,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    pub fn link_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the content area shows for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Page(Route),
    NotFound(String),
}

pub trait Router {
    fn resolve(&self, path: &str) -> Option<Route>;

    fn current_path(&self) -> &str;

    /// Client-side transition; returns false when already on `path`.
    fn navigate(&mut self, path: &str) -> bool;

    fn back(&mut self) -> bool;

    fn current_view(&self) -> View {
        let path = self.current_path();
        match self.resolve(path) {
            Some(route) => View::Page(route),
            None => View::NotFound(path.to_string()),
        }
    }
}

/// Exact-match table over the three fixed routes, with a history stack.
#[derive(Debug, Clone)]
pub struct StaticRouter {
    table: Vec<(&'static str, Route)>,
    history: Vec<String>,
}

impl StaticRouter {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            table: Route::ALL.iter().map(|route| (route.path(), *route)).collect(),
            history: vec![start_path.into()],
        }
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for StaticRouter {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

impl Router for StaticRouter {
    fn resolve(&self, path: &str) -> Option<Route> {
        self.table
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| *route)
    }

    fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    fn navigate(&mut self, path: &str) -> bool {
        if self.current_path() == path {
            return false;
        }
        tracing::debug!(from = self.current_path(), to = path, "navigate");
        self.history.push(path.to_string());
        true
    }

    fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        tracing::debug!(to = self.current_path(), "navigate back");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_paths_only() {
        let router = StaticRouter::default();
        assert_eq!(router.resolve("/"), Some(Route::Home));
        assert_eq!(router.resolve("/about"), Some(Route::About));
        assert_eq!(router.resolve("/contact"), Some(Route::Contact));
        assert_eq!(router.resolve("/about/"), None);
        assert_eq!(router.resolve("/About"), None);
        assert_eq!(router.resolve("/contact/team"), None);
    }

    #[test]
    fn unmatched_path_yields_not_found_view() {
        let router = StaticRouter::new("/missing");
        assert_eq!(router.current_view(), View::NotFound("/missing".to_string()));
    }

    #[test]
    fn navigate_and_back_walk_history() {
        let mut router = StaticRouter::default();
        assert!(router.navigate("/about"));
        assert!(router.navigate("/contact"));
        assert!(!router.navigate("/contact"));
        assert_eq!(router.depth(), 3);
        assert_eq!(router.current_view(), View::Page(Route::Contact));

        assert!(router.back());
        assert_eq!(router.current_path(), "/about");
        assert!(router.back());
        assert_eq!(router.current_path(), "/");
        assert!(!router.back());
        assert_eq!(router.current_path(), "/");
    }
}
