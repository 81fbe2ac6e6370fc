// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobdeck_app::ViewMode;
use rusqlite::{Connection, OptionalExtension, params};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const APP_NAME: &str = "jobdeck";

const SCHEMA_VERSION: i64 = 1;
const VIEW_MODE_KEY: &str = "ui.view_mode";

/// The one piece of state this system persists: a tiny settings table
/// holding the view-mode preference.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let printable = path.to_string_lossy().to_string();
        validate_db_path(&printable)?;
        let conn = Connection::open(path)
            .with_context(|| format!("open database at {}", path.display()))?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn raw_connection(&self) -> &Connection {
        &self.conn
    }

    pub fn bootstrap(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .context("read schema version")?;

        if version == 0 {
            self.conn
                .execute_batch(
                    "
                    CREATE TABLE IF NOT EXISTS settings (
                      key TEXT PRIMARY KEY,
                      value TEXT NOT NULL,
                      updated_at TEXT NOT NULL
                    );
                    ",
                )
                .context("create settings schema")?;
            self.conn
                .pragma_update(None, "user_version", SCHEMA_VERSION)
                .context("stamp schema version")?;
            return Ok(());
        }

        if version != SCHEMA_VERSION {
            bail!(
                "database schema version {version} is newer than this build supports ({SCHEMA_VERSION}); upgrade jobdeck or point JOBDECK_DB_PATH at a fresh file"
            );
        }
        Ok(())
    }

    fn get_setting_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("read setting {key}"))
    }

    fn put_setting_raw(&self, key: &str, value: &str) -> Result<()> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO settings (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
                ",
                params![key, value, now],
            )
            .with_context(|| format!("upsert setting {key}"))?;
        Ok(())
    }

    /// The persisted view mode. An absent or unrecognized token yields the
    /// default silently; bad values are replaced on the next write, not
    /// surfaced as errors.
    pub fn get_view_mode(&self) -> Result<ViewMode> {
        let raw = self.get_setting_raw(VIEW_MODE_KEY)?;
        Ok(raw
            .as_deref()
            .and_then(ViewMode::parse)
            .unwrap_or_default())
    }

    pub fn put_view_mode(&self, mode: ViewMode) -> Result<()> {
        self.put_setting_raw(VIEW_MODE_KEY, mode.as_str())
    }

    /// Test/diagnostic access to the raw stored token.
    pub fn raw_view_mode(&self) -> Result<Option<String>> {
        self.get_setting_raw(VIEW_MODE_KEY)
    }

    /// Test hook for simulating foreign writers of the preference key.
    pub fn put_raw_view_mode(&self, value: &str) -> Result<()> {
        self.put_setting_raw(VIEW_MODE_KEY, value)
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("JOBDECK_DB_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set JOBDECK_DB_PATH to a writable database path")
    })?;

    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("jobdeck.db"))
}

pub fn validate_db_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("database path must not be empty");
    }
    if path == ":memory:" {
        return Ok(());
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "database path {path:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("database path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    if path.contains('?') {
        bail!(
            "database path {path:?} contains '?'; remove query parameters and use a plain file path"
        );
    }

    Ok(())
}

fn configure_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .context("configure sqlite pragmas")
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format current timestamp")
}

#[cfg(test)]
mod tests {
    use super::validate_db_path;

    #[test]
    fn memory_path_is_accepted() {
        assert!(validate_db_path(":memory:").is_ok());
    }

    #[test]
    fn uri_paths_are_rejected() {
        assert!(validate_db_path("https://evil.example/jobdeck.db").is_err());
        assert!(validate_db_path("file:jobdeck.db").is_err());
        assert!(validate_db_path("/tmp/jobdeck.db?mode=ro").is_err());
    }

    #[test]
    fn empty_path_is_rejected() {
        let error = validate_db_path("").expect_err("empty path should fail");
        assert!(error.to_string().contains("must not be empty"));
    }
}
