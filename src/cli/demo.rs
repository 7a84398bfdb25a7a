use crate::error::Result;
use crate::importer::ingest_csv;
use crate::settings::get_data_dir;
use crate::store::{self, SqliteStore};

/// Sample export covering every recommendation band. Runs through the real
/// ingestion pipeline so the demo data behaves exactly like an import.
const SAMPLE_CSV: &str = "\
Nazwa zestawu reklam;Wydana kwota (PLN);Wyniki;Dodanie do koszyka w witrynie;Zainicjowanie finalizacji zakupu;Kliknięcia (wszystkie);Zasięg;Wyświetlenia;CPC (wszystkie) (PLN)
Szeroka grupa 18-45;412.80;18;41;29;812;24100;38500;1.42
Lookalike 1% kupujący;268.30;9;22;15;340;9800;15600;1.88
Retargeting 30 dni;50.60;2;8;5;120;3100;5200;1.10
Zimny ruch — wideo;510.45;6;19;11;655;19400;30200;2.35
Nowa kreacja testowa;0;0;0;0;0;0;0;1.50
";

pub fn run() -> Result<()> {
    let result = ingest_csv(SAMPLE_CSV)?;
    let mut store = SqliteStore::open(&get_data_dir().join("metamonitor.db"))?;
    store::save_metrics(&mut store, &result.metrics)?;

    println!(
        "Loaded {} sample ad sets. Try `metamonitor monitor`.",
        result.metrics.len()
    );
    Ok(())
}
