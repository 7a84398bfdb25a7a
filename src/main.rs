mod advisor;
mod cli;
mod error;
mod fmt;
mod funnel;
mod importer;
mod models;
mod parser;
mod settings;
mod store;
mod summary;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Import { file } => cli::import::run(&file),
        Commands::Load { file } => cli::load::run(&file),
        Commands::Export { output } => cli::export::run(output.as_deref()),
        Commands::Monitor { policy } => cli::monitor::run(&policy.to_policy()),
        Commands::Funnel { id } => cli::funnel::run(id),
        Commands::Matrix { policy } => cli::matrix::run(&policy.to_policy()),
        Commands::Set {
            id,
            spent,
            cpc,
            conversions,
            status,
            notes,
        } => cli::edit::run(id, spent, cpc, conversions, status, notes),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
        Commands::Clear => cli::clear::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
