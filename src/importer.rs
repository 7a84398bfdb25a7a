use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{MonitorError, Result};
use crate::models::{parse_count, parse_decimal, CampaignMetric, Funnel, Status};
use crate::parser::{parse_table, RawRow};

// ---------------------------------------------------------------------------
// Required columns — the verbatim contract with the Meta Ads export
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Nazwa zestawu reklam";
pub const COL_SPENT: &str = "Wydana kwota (PLN)";
pub const COL_RESULTS: &str = "Wyniki";
pub const COL_ADD_TO_CART: &str = "Dodanie do koszyka w witrynie";
pub const COL_CHECKOUT_INIT: &str = "Zainicjowanie finalizacji zakupu";
pub const COL_CLICKS: &str = "Kliknięcia (wszystkie)";
pub const COL_REACH: &str = "Zasięg";
pub const COL_IMPRESSIONS: &str = "Wyświetlenia";
pub const COL_CPC: &str = "CPC (wszystkie) (PLN)";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_NAME,
    COL_SPENT,
    COL_RESULTS,
    COL_ADD_TO_CART,
    COL_CHECKOUT_INIT,
    COL_CLICKS,
    COL_REACH,
    COL_IMPRESSIONS,
    COL_CPC,
];

/// Header validation is all-or-nothing: any missing column rejects the whole
/// file, reporting every missing name at once.
pub fn validate_headers(headers: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MonitorError::MissingColumns(missing))
    }
}

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

fn field<'a>(row: &'a RawRow, col: &str) -> &'a str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// Metric cells stay strings on the record; an empty cell becomes "0".
fn metric_cell(row: &RawRow, col: &str) -> String {
    let raw = field(row, col);
    if raw.is_empty() {
        "0".to_string()
    } else {
        raw.to_string()
    }
}

fn build_metric(index: usize, row: &RawRow) -> Option<CampaignMetric> {
    let name = field(row, COL_NAME);
    let spent = parse_decimal(field(row, COL_SPENT));
    let results = parse_count(field(row, COL_RESULTS));
    let cpc = parse_decimal(field(row, COL_CPC));

    // Admission rule: a usable record needs a name and at least one non-zero
    // primary metric.
    if name.trim().is_empty() || (spent == 0.0 && results == 0 && cpc == 0.0) {
        return None;
    }

    Some(CampaignMetric {
        // 1-based position in the pre-filter row sequence; ids are therefore
        // not necessarily contiguous after filtering.
        id: index as u32 + 1,
        name: name.to_string(),
        spent: metric_cell(row, COL_SPENT),
        cpc: metric_cell(row, COL_CPC),
        conversions: metric_cell(row, COL_RESULTS),
        status: Status::Active,
        notes: String::new(),
        funnel: Some(Funnel {
            impressions: parse_count(field(row, COL_IMPRESSIONS)),
            reach: parse_count(field(row, COL_REACH)),
            clicks: parse_count(field(row, COL_CLICKS)),
            checkout_init: parse_count(field(row, COL_CHECKOUT_INIT)),
            add_to_cart: parse_count(field(row, COL_ADD_TO_CART)),
            results: parse_count(field(row, COL_RESULTS)),
        }),
    })
}

/// Secondary admission filter, re-checked on the constructed record.
fn admissible(metric: &CampaignMetric) -> bool {
    metric.spent_value() > 0.0 || metric.cpc_value() > 0.0 || metric.conversions_value() > 0
}

pub fn normalize_rows(rows: &[RawRow]) -> Vec<CampaignMetric> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| build_metric(index, row))
        .filter(admissible)
        .collect()
}

// ---------------------------------------------------------------------------
// Ingestion entry points
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct IngestResult {
    pub metrics: Vec<CampaignMetric>,
    /// Data rows seen before admission filtering.
    pub parsed_rows: usize,
}

impl IngestResult {
    pub fn dropped(&self) -> usize {
        self.parsed_rows - self.metrics.len()
    }
}

/// Parse and validate a raw CSV export. Any error leaves the caller's
/// existing collection untouched; on success the result replaces it
/// wholesale.
pub fn ingest_csv(text: &str) -> Result<IngestResult> {
    let (headers, rows) = parse_table(text)?;
    validate_headers(&headers)?;
    let metrics = normalize_rows(&rows);
    Ok(IngestResult {
        metrics,
        parsed_rows: rows.len(),
    })
}

/// Wholesale import of a previously exported collection. Structural
/// pass-through: no id-uniqueness or range validation beyond the record
/// shape itself.
pub fn ingest_json(text: &str) -> Result<Vec<CampaignMetric>> {
    Ok(serde_json::from_str(text)?)
}

pub fn compute_checksum(file_path: &Path) -> Result<String> {
    let data = std::fs::read(file_path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(hex::encode(hasher.finalize()))
}
