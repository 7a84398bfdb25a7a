use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store::{self, SqliteStore};

pub fn run() -> Result<()> {
    let mut store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    store::clear_metrics(&mut store)?;
    println!("Portfolio cleared.");
    Ok(())
}
