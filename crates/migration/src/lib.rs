use std::{fmt::Display, path::PathBuf};

pub use sea_orm_migration::prelude::*;

mod m20260105_000001_init;

/// File name of the local sqlite store used when no database is configured.
pub const DEFAULT_DATABASE_FILE: &str = "holonet.db";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260105_000001_init::Migration)]
    }
}

/// Connection string for a sqlite file, created on first connect.
pub fn sqlite_url(path: impl Display) -> String {
    format!("sqlite:{path}?mode=rwc")
}

/// Throwaway sqlite file in the system temp dir.
///
/// Every binary falls back to this one, so data seeded by the admin tool is
/// what the server reads.
pub fn default_database_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DATABASE_FILE)
}

pub fn default_database_url() -> String {
    sqlite_url(default_database_path().display())
}
