use std::sync::Mutex;

use tracing::{debug, info};

/// Receives forced navigations (post-login landing, redirect to login).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator for headless use: the redirect is only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &str) {
        info!("Navigating to {}", route);
    }
}

/// Keeps every requested route in memory, oldest first.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.routes.lock().ok()?.last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        debug!("Recording navigation to {}", route);
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_routes_in_order() {
        let navigator = RecordingNavigator::new();
        assert_eq!(navigator.last(), None);

        navigator.navigate("/dashboard");
        navigator.navigate("/login");

        assert_eq!(navigator.routes(), ["/dashboard", "/login"]);
        assert_eq!(navigator.last().as_deref(), Some("/login"));
    }
}
