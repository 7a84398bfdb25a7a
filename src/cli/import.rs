use std::path::Path;

use crate::error::Result;
use crate::importer::{compute_checksum, ingest_csv};
use crate::settings::get_data_dir;
use crate::store::{self, ImportInfo, SqliteStore};

pub fn run(file: &str) -> Result<()> {
    let file_path = Path::new(file);
    let text = std::fs::read_to_string(file_path)?;

    // Parse and validate before touching the store: a rejected file leaves
    // the existing portfolio intact.
    let result = ingest_csv(&text)?;

    let mut store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    store::save_metrics(&mut store, &result.metrics)?;
    store::save_import_info(
        &mut store,
        &ImportInfo {
            filename: file_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string(),
            imported_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            row_count: result.parsed_rows,
            kept_count: result.metrics.len(),
            checksum: compute_checksum(file_path)?,
        },
    )?;

    println!(
        "{} ad sets imported, {} rows dropped (blank or zero-metric)",
        result.metrics.len(),
        result.dropped()
    );
    Ok(())
}
