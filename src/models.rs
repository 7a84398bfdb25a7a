use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

/// Total numeric coercion: an unparsable or empty cell is 0, never an error.
pub fn parse_decimal(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

pub fn parse_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Warning,
    Stopped,
}

impl Status {
    pub fn parse(raw: &str) -> Option<Status> {
        match raw {
            "active" => Some(Status::Active),
            "warning" => Some(Status::Warning),
            "stopped" => Some(Status::Stopped),
            _ => None,
        }
    }

    /// Operator-facing label, as shown in the status selector.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "AKTYWNA",
            Status::Warning => "UWAGA",
            Status::Stopped => "STOP",
        }
    }
}

/// Six-stage conversion pipeline counts. Monotonic shape is expected from the
/// export but never enforced; upstream data may violate it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Funnel {
    pub impressions: u64,
    pub reach: u64,
    pub clicks: u64,
    pub checkout_init: u64,
    pub add_to_cart: u64,
    pub results: u64,
}

/// One ad set's performance record. The three metric fields stay strings to
/// preserve user-entered precision; consumers coerce via `parse_decimal` /
/// `parse_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetric {
    pub id: u32,
    pub name: String,
    pub spent: String,
    pub cpc: String,
    pub conversions: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funnel: Option<Funnel>,
}

impl CampaignMetric {
    pub fn spent_value(&self) -> f64 {
        parse_decimal(&self.spent)
    }

    pub fn cpc_value(&self) -> f64 {
        parse_decimal(&self.cpc)
    }

    pub fn conversions_value(&self) -> u64 {
        parse_count(&self.conversions)
    }
}

/// A single-field edit applied through `update_metric`.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricEdit {
    Spent(String),
    Cpc(String),
    Conversions(String),
    Status(Status),
    Notes(String),
}

/// Apply one field edit to every record with the given id, returning the new
/// collection. Ids are not guaranteed unique after a JSON import; all matches
/// are updated.
pub fn update_metric(
    metrics: &[CampaignMetric],
    id: u32,
    edit: &MetricEdit,
) -> Result<Vec<CampaignMetric>> {
    if !metrics.iter().any(|m| m.id == id) {
        return Err(MonitorError::UnknownRecord(id));
    }
    Ok(metrics
        .iter()
        .map(|m| {
            if m.id != id {
                return m.clone();
            }
            let mut m = m.clone();
            match edit {
                MetricEdit::Spent(v) => m.spent = v.clone(),
                MetricEdit::Cpc(v) => m.cpc = v.clone(),
                MetricEdit::Conversions(v) => m.conversions = v.clone(),
                MetricEdit::Status(s) => m.status = *s,
                MetricEdit::Notes(v) => m.notes = v.clone(),
            }
            m
        })
        .collect())
}
