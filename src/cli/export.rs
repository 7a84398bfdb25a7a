use std::path::PathBuf;

use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store::{self, SqliteStore};

pub fn run(output: Option<&str>) -> Result<()> {
    let store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    let metrics = store::load_metrics(&store)?;

    let path = match output {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(format!(
            "metamonitor_{}.json",
            chrono::Local::now().format("%Y-%m-%d")
        )),
    };
    let json = serde_json::to_string_pretty(&metrics)?;
    std::fs::write(&path, format!("{json}\n"))?;

    println!("Exported {} records to {}", metrics.len(), path.display());
    Ok(())
}
