//! Routes, the auth guard and history navigation for the App.

use super::screens::{DetailScreen, HomeScreen, ListingScreen, LoginForm, SavedScreen};
use super::{App, Screen};
use crate::models::Category;

/// Client-side route; paths match the web front-end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
    Trending,
    Gaming,
    SavedVideos,
    Video(String),
}

/// Sidebar entries, top to bottom.
pub const SIDEBAR_ROUTES: [Route; 4] = [
    Route::Home,
    Route::Trending,
    Route::Gaming,
    Route::SavedVideos,
];

impl Route {
    /// Parse a path such as `/trending` or `/videos/ad9822d2`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match trimmed {
            "/" | "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/trending" => Some(Route::Trending),
            "/gaming" => Some(Route::Gaming),
            "/saved-videos" => Some(Route::SavedVideos),
            other => other
                .strip_prefix("/videos/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::Video(id.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Home => "/".to_string(),
            Route::Trending => "/trending".to_string(),
            Route::Gaming => "/gaming".to_string(),
            Route::SavedVideos => "/saved-videos".to_string(),
            Route::Video(id) => format!("/videos/{}", id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Trending => "Trending",
            Route::Gaming => "Gaming",
            Route::SavedVideos => "Saved Videos",
            Route::Video(_) => "Video",
        }
    }

    /// Everything except the login page needs a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Resolve where a navigation actually lands.
pub fn guard(requested: Route, authenticated: bool) -> Route {
    match (requested.is_protected(), authenticated) {
        (true, false) => Route::Login,
        (false, true) => Route::Home,
        _ => requested,
    }
}

impl App {
    /// Navigate to `route`, remembering the current route for [`App::back`].
    pub fn navigate(&mut self, route: Route) {
        let target = guard(route, self.session.is_authenticated());
        if target == Route::Login {
            self.history.clear();
        } else if self.route != Route::Login && self.route != target {
            self.history.push(self.route.clone());
        }
        self.mount(target);
    }

    /// Navigate to `route` discarding history.
    pub fn replace(&mut self, route: Route) {
        self.history.clear();
        let target = guard(route, self.session.is_authenticated());
        self.mount(target);
    }

    /// Return to the previous route. Returns `false` when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                let target = guard(previous, self.session.is_authenticated());
                if target == Route::Login {
                    self.history.clear();
                }
                self.mount(target);
                true
            }
            None => false,
        }
    }

    /// Rebuild the screen for `route` and issue its initial fetch.
    fn mount(&mut self, route: Route) {
        tracing::info!(path = %route.path(), "navigate");
        self.screen = match &route {
            Route::Login => Screen::Login(LoginForm::default()),
            Route::Home => Screen::Home(HomeScreen::new()),
            Route::Trending => Screen::Listing(ListingScreen::new(Category::Trending, None)),
            Route::Gaming => Screen::Listing(ListingScreen::new(Category::Gaming, None)),
            Route::SavedVideos => Screen::Saved(SavedScreen::default()),
            Route::Video(id) => Screen::Detail(DetailScreen::new(id.clone())),
        };
        self.route = route;
        self.fetch_current();
        self.mark_dirty();
    }

    /// Clear the session and return to the login page.
    pub fn logout(&mut self) {
        if let Err(err) = crate::auth::sign_out(self.session.as_ref()) {
            tracing::warn!(error = %err, "failed to clear session on logout");
            self.status = Some(format!("Logout failed: {}", err));
        }
        self.replace(Route::Login);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/trending"), Some(Route::Trending));
        assert_eq!(Route::parse("/gaming/"), Some(Route::Gaming));
        assert_eq!(Route::parse("/saved-videos"), Some(Route::SavedVideos));
        assert_eq!(
            Route::parse("/videos/ad9822d2"),
            Some(Route::Video("ad9822d2".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Route::parse("/videos/"), None);
        assert_eq!(Route::parse("/videos/a/b"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        let routes = [
            Route::Login,
            Route::Home,
            Route::Trending,
            Route::Gaming,
            Route::SavedVideos,
            Route::Video("x1".to_string()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(guard(Route::Trending, false), Route::Login);
        assert_eq!(guard(Route::Video("a".into()), false), Route::Login);
        assert_eq!(guard(Route::Login, false), Route::Login);
        assert_eq!(guard(Route::Login, true), Route::Home);
        assert_eq!(guard(Route::Gaming, true), Route::Gaming);
    }

    #[test]
    fn test_sidebar_labels() {
        let labels: Vec<_> = SIDEBAR_ROUTES.iter().map(Route::label).collect();
        assert_eq!(labels, vec!["Home", "Trending", "Gaming", "Saved Videos"]);
    }
}
