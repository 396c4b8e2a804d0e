//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the command-line front end.
pub struct AppConfig {
    /// SQLite database location, e.g. `app.db`.
    pub database_url: String,
    /// Apply pending migrations when opening the database.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_run_migrations() -> bool {
    true
}
