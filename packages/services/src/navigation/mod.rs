use std::fmt;
use std::sync::Mutex;

use mockall::automock;
use models::EmployeeId;

/// Pages of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Bootstrap,
    Employees,
    CreateEmployee,
    EditEmployee(EmployeeId),
    NotFound,
}

impl Route {
    /// Resolves a URL path. The empty path redirects home; anything
    /// unrecognised is `NotFound`.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["home"] => Route::Home,
            ["bootstrap"] => Route::Bootstrap,
            ["employees"] => Route::Employees,
            ["employees", "create"] => Route::CreateEmployee,
            ["employees", "edit", id] => id
                .parse()
                .map(Route::EditEmployee)
                .unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/home".to_string(),
            Route::Bootstrap => "/bootstrap".to_string(),
            Route::Employees => "/employees".to_string(),
            Route::CreateEmployee => "/employees/create".to_string(),
            Route::EditEmployee(id) => format!("/employees/edit/{}", id),
            Route::NotFound => "/not-found".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[automock]
pub trait Navigator {
    fn go_to(&self, route: Route);
}

/// Navigator that remembers where each request was sent, for callers that
/// answer with the redirect instead of rendering it.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    visited: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.visited.lock().ok().and_then(|visited| visited.last().copied())
    }
}

impl Navigator for HistoryNavigator {
    fn go_to(&self, route: Route) {
        tracing::debug!(route = %route, "navigating");
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(route);
        }
    }
}
