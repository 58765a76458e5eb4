/// Per-user access state for the shared-secret gate in front of the pipeline.
///
/// Starts locked; a successful [`Session::authenticate`] unlocks it for the rest
/// of the session. A failed attempt leaves it as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a candidate password against the configured secret.
    pub fn authenticate(&mut self, candidate: &str, secret: &str) -> bool {
        let ok = candidate == secret;
        if ok {
            self.authenticated = true;
        }
        ok
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
