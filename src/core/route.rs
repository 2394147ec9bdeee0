//! # Routes
//!
//! Every screen Shelf can show, as a static enum. Detail and Update carry the
//! catalog book id they were opened for.
//!
//! Routes round-trip through their path form (`DetailScreen/{bookId}`), which
//! is what gets logged.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Splash,
    Login,
    CreateAccount,
    Home,
    Search,
    Detail(String),
    Update(String),
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The route name is not one of the known screens.
    Unrecognized(String),
    /// A parameterized route was given without its book id.
    MissingParameter(&'static str),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unrecognized(route) => write!(f, "Route {route} is not recognised"),
            RouteError::MissingParameter(name) => write!(f, "Route {name} requires a bookId"),
        }
    }
}

impl std::error::Error for RouteError {}

impl Route {
    /// The screen name, without parameters.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Splash => "SplashScreen",
            Route::Login => "LoginScreen",
            Route::CreateAccount => "CreateAccountScreen",
            Route::Home => "ReaderHomeScreen",
            Route::Search => "SearchScreen",
            Route::Detail(_) => "DetailScreen",
            Route::Update(_) => "UpdateScreen",
            Route::Stats => "ReaderStatsScreen",
        }
    }

    /// Full route path, e.g. `UpdateScreen/abc123`.
    pub fn path(&self) -> String {
        match self {
            Route::Detail(id) | Route::Update(id) => format!("{}/{}", self.name(), id),
            _ => self.name().to_string(),
        }
    }

    /// Human-readable title for the title bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Splash => "Welcome",
            Route::Login => "Sign In",
            Route::CreateAccount => "Create Account",
            Route::Home => "A.Reader",
            Route::Search => "Search Books",
            Route::Detail(_) => "Book Details",
            Route::Update(_) => "Update Book",
            Route::Stats => "Book Stats",
        }
    }

    /// Screens that only make sense with a signed-in user.
    pub fn requires_user(&self) -> bool {
        !matches!(self, Route::Splash | Route::Login | Route::CreateAccount)
    }

    /// Resolve a route path. A missing route means the home screen; anything
    /// that isn't a known screen name is an error.
    pub fn from_route(route: Option<&str>) -> Result<Route, RouteError> {
        let Some(route) = route else {
            return Ok(Route::Home);
        };

        let (name, param) = match route.split_once('/') {
            Some((name, param)) => (name, Some(param)),
            None => (route, None),
        };
        let book_id = || {
            param
                .filter(|p| !p.is_empty())
                .map(str::to_string)
        };

        match name {
            "SplashScreen" => Ok(Route::Splash),
            "LoginScreen" => Ok(Route::Login),
            "CreateAccountScreen" => Ok(Route::CreateAccount),
            "ReaderHomeScreen" => Ok(Route::Home),
            "SearchScreen" => Ok(Route::Search),
            "ReaderStatsScreen" => Ok(Route::Stats),
            "DetailScreen" => book_id()
                .map(Route::Detail)
                .ok_or(RouteError::MissingParameter("DetailScreen")),
            "UpdateScreen" => book_id()
                .map(Route::Update)
                .ok_or(RouteError::MissingParameter("UpdateScreen")),
            _ => Err(RouteError::Unrecognized(route.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_route(Some(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Back stack of visited routes. The bottom entry is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    pub fn current(&self) -> &Route {
        // The stack is created non-empty and `back()` keeps the last entry
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Clear the history and show `route` as the only entry.
    pub fn replace(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }

    /// Pop the current route. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
