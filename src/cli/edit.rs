use crate::error::{MonitorError, Result};
use crate::models::{update_metric, MetricEdit, Status};
use crate::settings::get_data_dir;
use crate::store::{self, SqliteStore};

pub fn run(
    id: u32,
    spent: Option<String>,
    cpc: Option<String>,
    conversions: Option<String>,
    status: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let mut edits = Vec::new();
    if let Some(v) = spent {
        edits.push(MetricEdit::Spent(v));
    }
    if let Some(v) = cpc {
        edits.push(MetricEdit::Cpc(v));
    }
    if let Some(v) = conversions {
        edits.push(MetricEdit::Conversions(v));
    }
    if let Some(v) = status {
        let status = Status::parse(&v).ok_or(MonitorError::UnknownStatus(v))?;
        edits.push(MetricEdit::Status(status));
    }
    if let Some(v) = notes {
        edits.push(MetricEdit::Notes(v));
    }
    if edits.is_empty() {
        return Err(MonitorError::Other(
            "Nothing to update: pass at least one of --spent, --cpc, --conversions, --status, --notes".to_string(),
        ));
    }

    let mut store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    let mut metrics = store::load_metrics(&store)?;
    for edit in &edits {
        metrics = update_metric(&metrics, id, edit)?;
    }
    store::save_metrics(&mut store, &metrics)?;

    println!("Updated record {id}");
    Ok(())
}
