use crate::error::Result;
use crate::importer::ingest_json;
use crate::settings::get_data_dir;
use crate::store::{self, SqliteStore};

pub fn run(file: &str) -> Result<()> {
    let text = std::fs::read_to_string(file)?;

    // A malformed payload errors out here, before any state is replaced.
    let metrics = ingest_json(&text)?;

    let mut store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    store::save_metrics(&mut store, &metrics)?;

    println!("{} records loaded from {file}", metrics.len());
    Ok(())
}
