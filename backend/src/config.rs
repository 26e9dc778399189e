use std::env;

/// Backend selection, resolved from the environment once at startup and
/// passed down through composition.
///
/// The relational backend is chosen only when `USE_DATABASE` is the
/// literal `true` and `DATABASE_URL` is non-empty; any other combination
/// falls back to the in-memory backend. The selection is not
/// hot-reloadable: nothing re-reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    use_database: bool,
    database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::resolve(env::var("USE_DATABASE").ok(), env::var("DATABASE_URL").ok())
    }

    fn resolve(use_database: Option<String>, database_url: Option<String>) -> Self {
        Self {
            use_database: use_database.as_deref() == Some("true"),
            database_url: database_url.filter(|url| !url.is_empty()),
        }
    }

    /// Connection string for the relational backend, when both selector
    /// variables opt in. `None` selects the in-memory backend.
    pub fn database_url(&self) -> Option<&str> {
        if self.use_database {
            self.database_url.as_deref()
        } else {
            None
        }
    }
}
