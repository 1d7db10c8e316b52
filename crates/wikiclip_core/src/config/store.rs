//! SQLite-backed settings storage.
//!
//! # Invariants
//! - Missing defaults are seeded on construction without clobbering edits.
//! - `reset_defaults` restores every seeded key to its shipped value.

use super::{ConfigResult, ConfigStorage, SETTINGS_DEFAULTS};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;

/// Settings storage over the `settings` table.
pub struct SqliteConfigStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteConfigStorage<'conn> {
    /// Wraps a bootstrapped connection and seeds any missing defaults.
    pub fn new(conn: &'conn Connection) -> ConfigResult<Self> {
        let storage = Self { conn };
        storage.seed_missing_defaults()?;
        Ok(storage)
    }

    /// Restores every seeded key to its shipped default value.
    pub fn reset_defaults(&self) -> ConfigResult<()> {
        for (key, value) in SETTINGS_DEFAULTS {
            self.set(key, value)?;
        }
        info!("event=settings_reset module=config status=ok");
        Ok(())
    }

    fn seed_missing_defaults(&self) -> ConfigResult<()> {
        let mut seeded = 0usize;
        for (key, value) in SETTINGS_DEFAULTS {
            seeded += self.conn.execute(
                "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
                params![key, value],
            )?;
        }
        if seeded > 0 {
            info!("event=settings_seed module=config status=ok seeded={seeded}");
        }
        Ok(())
    }
}

impl ConfigStorage for SqliteConfigStorage<'_> {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn get_all(&self) -> ConfigResult<BTreeMap<String, String>> {
        let mut stmt = self.conn.prepare("SELECT key, value FROM settings")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut all = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            all.insert(key, value);
        }
        Ok(all)
    }

    fn set(&self, key: &str, value: &str) -> ConfigResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
