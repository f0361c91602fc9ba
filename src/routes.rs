//! Application route table.
//!
//! `/login` is public; everything else sits behind the auth guard.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Faturas,
}

/// Routes shown in the navbar, in display order.
pub const NAV_ROUTES: [Route; 2] = [Route::Dashboard, Route::Faturas];

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Faturas => "/faturas",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Faturas => "Faturas",
        }
    }

    /// Match a location pathname against the table, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        [Self::Login, Self::Dashboard, Self::Faturas]
            .into_iter()
            .find(|route| route.path() == trimmed)
    }
}
