//! Navigation capability.
//!
//! Successful logins end in a redirect to a dashboard page. In the deployed
//! portal that is a location change; here the destination resolves against
//! the configured origin and opens in the system browser, best effort.

/// Receives redirect destinations from the console.
pub trait Navigator {
    fn navigate(&mut self, destination: &str);
}

/// Opens destinations in the system browser.
///
/// Relative destinations resolve against the portal origin when one is
/// configured. Set `PLACEMENT_NO_BROWSER` to suppress the browser launch;
/// the resolved destination is still recorded and logged.
#[derive(Debug, Clone, Default)]
pub struct SystemNavigator {
    origin: Option<String>,
    /// Resolved destinations, in navigation order.
    pub destinations: Vec<String>,
}

impl SystemNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative destinations against `origin`.
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
            destinations: Vec::new(),
        }
    }

    fn resolve(&self, destination: &str) -> String {
        if destination.starts_with("http://") || destination.starts_with("https://") {
            return destination.to_string();
        }
        match &self.origin {
            Some(origin) => format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                destination.trim_start_matches('/')
            ),
            None => destination.to_string(),
        }
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&mut self, destination: &str) {
        let resolved = self.resolve(destination);
        tracing::info!(destination = %resolved, "redirecting");

        // Browser launch is best effort, skipped in tests and headless runs.
        if std::env::var("PLACEMENT_NO_BROWSER").is_err() {
            let _ = open::that(&resolved);
        }
        self.destinations.push(resolved);
    }
}

/// Records destinations instead of opening them. Used in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub destinations: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: &str) {
        self.destinations.push(destination.to_string());
    }
}
