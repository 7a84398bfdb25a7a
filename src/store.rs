use std::path::Path;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::CampaignMetric;

pub const METRICS_KEY: &str = "campaign_metrics";
pub const IMPORT_INFO_KEY: &str = "last_import";

/// The engine only ever reads and writes whole JSON blobs under fixed keys;
/// the medium behind them is injected so tests can swap it out.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// SQLite-backed store
// ---------------------------------------------------------------------------

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl StateStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM state WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO state (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM state WHERE key = ?1", [key])?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Collection blob
// ---------------------------------------------------------------------------

/// Load the current collection; an absent key is an empty portfolio.
pub fn load_metrics(store: &dyn StateStore) -> Result<Vec<CampaignMetric>> {
    match store.get(METRICS_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Mirror the collection into the store; rewritten wholesale on every
/// mutation.
pub fn save_metrics(store: &mut dyn StateStore, metrics: &[CampaignMetric]) -> Result<()> {
    store.set(METRICS_KEY, &serde_json::to_string(metrics)?)
}

pub fn clear_metrics(store: &mut dyn StateStore) -> Result<()> {
    store.remove(METRICS_KEY)?;
    store.remove(IMPORT_INFO_KEY)
}

// ---------------------------------------------------------------------------
// Import provenance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportInfo {
    pub filename: String,
    pub imported_at: String,
    pub row_count: usize,
    pub kept_count: usize,
    pub checksum: String,
}

pub fn save_import_info(store: &mut dyn StateStore, info: &ImportInfo) -> Result<()> {
    store.set(IMPORT_INFO_KEY, &serde_json::to_string(info)?)
}

pub fn load_import_info(store: &dyn StateStore) -> Result<Option<ImportInfo>> {
    match store.get(IMPORT_INFO_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
