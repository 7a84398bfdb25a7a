use crate::error::Result;
use crate::fmt::format_bytes;
use crate::models::Status;
use crate::settings::load_settings;
use crate::store::{self, SqliteStore};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("metamonitor.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {}", format_bytes(size));

        let store = SqliteStore::open(&db_path)?;
        let metrics = store::load_metrics(&store)?;
        let active = metrics.iter().filter(|m| m.status == Status::Active).count();

        println!();
        println!("Ad sets:    {}", metrics.len());
        println!("Active:     {active}/{}", metrics.len());

        if let Some(info) = store::load_import_info(&store)? {
            println!();
            println!("Last import:  {} ({})", info.filename, info.imported_at);
            println!(
                "  {} rows parsed, {} kept",
                info.row_count, info.kept_count
            );
            println!("  checksum {}", &info.checksum[..12.min(info.checksum.len())]);
        }
    } else {
        println!();
        println!("Database not found. Run `metamonitor init` to set up.");
    }

    Ok(())
}
