use crate::error::{MonitorError, Result};
use crate::fmt::{grouped, percent};
use crate::funnel::{fill_ratio, max_value, step_percentage, steps};
use crate::settings::get_data_dir;
use crate::store::{self, SqliteStore};

const BAR_WIDTH: usize = 30;

pub fn run(id: u32) -> Result<()> {
    let store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    let metrics = store::load_metrics(&store)?;
    let metric = metrics
        .iter()
        .find(|m| m.id == id)
        .ok_or(MonitorError::UnknownRecord(id))?;

    println!("{} — lejek sprzedażowy", metric.name);
    println!();

    let Some(funnel) = &metric.funnel else {
        println!("No funnel data for this ad set.");
        return Ok(());
    };

    let max = max_value(funnel);
    for (i, step) in steps(funnel).iter().enumerate() {
        let conversion = if i == 0 {
            String::new()
        } else {
            percent(step_percentage(step, max))
        };
        println!(
            "{:<20} {:>10} {:>9}  {}",
            step.label,
            grouped(step.value),
            conversion,
            bar(fill_ratio(step.value, max))
        );
    }
    Ok(())
}

fn bar(fill: f64) -> String {
    let filled = ((fill / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
