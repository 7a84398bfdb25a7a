use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::advisor::{cost_per_result, recommend, DecisionPolicy, Recommendation};
use crate::error::Result;
use crate::fmt::pln;
use crate::models::CampaignMetric;
use crate::settings::get_data_dir;
use crate::store::{self, SqliteStore};
use crate::summary::summarize;

pub fn run(policy: &DecisionPolicy) -> Result<()> {
    let store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    let metrics = store::load_metrics(&store)?;

    print_summary(&metrics);

    if metrics.is_empty() {
        println!();
        println!("No data. Run `metamonitor import <file.csv>` to get started.");
        return Ok(());
    }

    println!();
    println!("{}", format_monitor(&metrics, policy));
    Ok(())
}

fn print_summary(metrics: &[CampaignMetric]) {
    let s = summarize(metrics);
    println!("Łączne wydatki:    {}", pln(s.total_spent));
    println!("Średnie CPC:       {}", pln(s.average_cpc));
    println!("Łączne konwersje:  {}", s.total_conversions);
    println!("Aktywne kreacje:   {}/{}", s.active, s.total);
}

pub fn format_monitor(metrics: &[CampaignMetric], policy: &DecisionPolicy) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Zestaw reklam",
        "Wydatki",
        "CPC",
        "Konwersje",
        "Koszt/Zakup",
        "Status",
        "Rekomendacja",
        "Notatki",
    ]);
    for metric in metrics {
        let recommendation = recommend(metric, policy);
        let cost = cost_per_result(metric.spent_value(), metric.conversions_value());
        table.add_row(vec![
            Cell::new(metric.id),
            Cell::new(&metric.name),
            Cell::new(pln(metric.spent_value())),
            Cell::new(pln(metric.cpc_value())),
            Cell::new(metric.conversions_value()),
            Cell::new(pln(cost)),
            Cell::new(metric.status.label()),
            Cell::new(colored_label(recommendation)),
            Cell::new(&metric.notes),
        ]);
    }
    table.to_string()
}

fn colored_label(recommendation: Recommendation) -> String {
    let label = recommendation.label();
    match recommendation {
        Recommendation::Scale => label.green().bold().to_string(),
        Recommendation::Stop => label.red().bold().to_string(),
        Recommendation::Watch => label.yellow().to_string(),
        Recommendation::EnterData => label.dimmed().to_string(),
    }
}
