//! Handles settings for the application.
//!
//! Sources, lowest priority first: built-in defaults, the optional
//! `settings.toml` (or the file named by `HOLONET_SETTINGS`), `HOLONET_*`
//! environment variables, then the conventional `PORT` and `DATABASE_URL`.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_SETTINGS_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// User every favorites request acts on behalf of.
    pub user_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
    Url(String),
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => migration::sqlite_url(path),
            Database::Url(url) => url.clone(),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Database::Sqlite(migration::default_database_path().display().to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    #[serde(default)]
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let path = std::env::var("HOLONET_SETTINGS")
            .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());

        let builder = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 3000)?
            .set_default("server.user_id", 1)?
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix("HOLONET")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if let Ok(url) = std::env::var("DATABASE_URL") {
            settings.database = Database::Url(url);
        }

        Ok(settings)
    }
}
