use crate::models::CampaignMetric;

/// Thresholds driving the classifier. Caller-supplied per invocation; the
/// engine never persists them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionPolicy {
    pub max_cpc: f64,
    pub max_cost: f64,
    pub min_purchases: u64,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            max_cpc: 2.0,
            max_cost: 29.0,
            min_purchases: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    EnterData,
    Scale,
    Stop,
    Watch,
}

impl Recommendation {
    /// Operator-facing labels, kept in the dashboard's original language.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::EnterData => "WPROWADŹ DANE",
            Recommendation::Scale => "SKALUJ",
            Recommendation::Stop => "ZATRZYMAJ",
            Recommendation::Watch => "OBSERWUJ",
        }
    }
}

/// Cost-per-result: spend over conversions, 0 when there are no conversions.
pub fn cost_per_result(spent: f64, conversions: u64) -> f64 {
    if conversions > 0 {
        spent / conversions as f64
    } else {
        0.0
    }
}

/// Classify one record. First matching rule wins; the order is part of the
/// contract (rule 3 deliberately shadows part of the region rule 4 would
/// otherwise cover).
pub fn recommend(metric: &CampaignMetric, policy: &DecisionPolicy) -> Recommendation {
    let spent = metric.spent_value();
    let cpc = metric.cpc_value();
    let conversions = metric.conversions_value();
    let cost = cost_per_result(spent, conversions);

    if spent == 0.0 || cpc == 0.0 {
        return Recommendation::EnterData;
    }
    if cpc <= policy.max_cpc && cost <= policy.max_cost && conversions >= policy.min_purchases {
        return Recommendation::Scale;
    }
    if cpc > policy.max_cpc || cost > policy.max_cost {
        return Recommendation::Stop;
    }
    Recommendation::Watch
}
