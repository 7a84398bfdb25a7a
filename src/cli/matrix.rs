use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::advisor::DecisionPolicy;
use crate::error::Result;

/// Render the scaling rules as the two-by-two threshold matrix from the
/// dashboard: CPC bands across, cost-per-purchase bands down.
pub fn run(policy: &DecisionPolicy) -> Result<()> {
    println!("Zasady skalowania");
    println!(
        "Minimum {} zakupów wymagane do skalowania",
        policy.min_purchases
    );
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(""),
        Cell::new(format!("Niskie CPC (≤{} PLN)", policy.max_cpc)),
        Cell::new(format!("Wysokie CPC (>{} PLN)", policy.max_cpc)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Niski koszt (≤{} PLN)", policy.max_cost)),
        Cell::new(format!(
            "{} (gdy ≥{} zakupów)",
            "SKALUJ".green().bold(),
            policy.min_purchases
        )),
        Cell::new(format!("{} — monitoruj CPC", "OBSERWUJ".yellow())),
    ]);
    table.add_row(vec![
        Cell::new(format!("Wysoki koszt (>{} PLN)", policy.max_cost)),
        Cell::new(format!("{} — monitoruj koszt", "OBSERWUJ".yellow())),
        Cell::new(format!("{} — za wysokie koszty", "WYŁĄCZ".red().bold())),
    ]);

    println!("{table}");
    Ok(())
}
