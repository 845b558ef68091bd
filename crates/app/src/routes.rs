//! The route surface the client core operates against.
//!
//! Routing-library mechanics stay outside the core; this module only
//! names the destinations, maps them to and from path strings, and says
//! which of them sit behind the access gate. The edit route carries the
//! opaque record id extracted from the navigation path.

use creel_core::types::LogId;

/// Every destination the application navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    Register,
    Dashboard,
    NewLog,
    EditLog(LogId),
    Settings,
    Stats,
    NotFound,
}

impl Route {
    /// Parse a navigation path. Unknown paths land on [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        match path {
            "/" => return Route::Home,
            "/signin" => return Route::SignIn,
            "/register" => return Route::Register,
            "/dashboard" => return Route::Dashboard,
            "/new" => return Route::NewLog,
            "/settings" => return Route::Settings,
            "/stats" => return Route::Stats,
            _ => {}
        }

        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["fishing_logs", id, "edit"] => id
                .parse()
                .map(Route::EditLog)
                .unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    /// The navigation path for this destination.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::NewLog => "/new".to_string(),
            Route::EditLog(id) => format!("/fishing_logs/{id}/edit"),
            Route::Settings => "/settings".to_string(),
            Route::Stats => "/stats".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Whether this destination sits behind the access gate.
    pub const fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::NewLog
                | Route::EditLog(_)
                | Route::Settings
                | Route::Stats
        )
    }
}
