use crate::models::{CampaignMetric, Status};

/// Portfolio totals, recomputed wholesale on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioSummary {
    pub total_spent: f64,
    pub average_cpc: f64,
    pub total_conversions: u64,
    pub active: usize,
    pub total: usize,
}

pub fn summarize(metrics: &[CampaignMetric]) -> PortfolioSummary {
    let total_spent = metrics.iter().map(|m| m.spent_value()).sum();
    let cpc_sum: f64 = metrics.iter().map(|m| m.cpc_value()).sum();
    // Denominator counts records with a non-empty cpc string: "0" counts,
    // "" does not. Zero denominator resolves to 0.
    let cpc_count = metrics.iter().filter(|m| !m.cpc.is_empty()).count();
    let average_cpc = if cpc_count == 0 {
        0.0
    } else {
        cpc_sum / cpc_count as f64
    };
    let total_conversions = metrics.iter().map(|m| m.conversions_value()).sum();
    let active = metrics.iter().filter(|m| m.status == Status::Active).count();

    PortfolioSummary {
        total_spent,
        average_cpc,
        total_conversions,
        active,
        total: metrics.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(spent: &str, cpc: &str, conversions: &str, status: Status) -> CampaignMetric {
        CampaignMetric {
            id: 1,
            name: "Zestaw".to_string(),
            spent: spent.to_string(),
            cpc: cpc.to_string(),
            conversions: conversions.to_string(),
            status,
            notes: String::new(),
            funnel: None,
        }
    }

    #[test]
    fn test_three_record_aggregate() {
        let metrics = vec![
            metric("100", "2", "5", Status::Active),
            metric("0", "", "0", Status::Stopped),
            metric("50", "3", "2", Status::Active),
        ];
        let s = summarize(&metrics);
        assert_eq!(s.total_spent, 150.0);
        // Empty-string cpc is excluded from the denominator: (2+3)/2.
        assert_eq!(s.average_cpc, 2.5);
        assert_eq!(s.total_conversions, 7);
        assert_eq!(s.active, 2);
        assert_eq!(s.total, 3);
    }

    #[test]
    fn test_zero_string_cpc_counts_in_denominator() {
        let metrics = vec![
            metric("10", "4", "1", Status::Active),
            metric("10", "0", "1", Status::Active),
        ];
        assert_eq!(summarize(&metrics).average_cpc, 2.0);
    }

    #[test]
    fn test_empty_portfolio_is_all_zeros() {
        let s = summarize(&[]);
        assert_eq!(s, PortfolioSummary::default());
    }

    #[test]
    fn test_no_cpc_values_resolves_to_zero_average() {
        let metrics = vec![metric("10", "", "1", Status::Active)];
        assert_eq!(summarize(&metrics).average_cpc, 0.0);
    }

    #[test]
    fn test_unparsable_values_count_as_zero() {
        let metrics = vec![
            metric("abc", "xyz", "n/a", Status::Warning),
            metric("25", "1", "3", Status::Active),
        ];
        let s = summarize(&metrics);
        assert_eq!(s.total_spent, 25.0);
        // "xyz" is non-empty, so it joins the denominator as 0.
        assert_eq!(s.average_cpc, 0.5);
        assert_eq!(s.total_conversions, 3);
        assert_eq!(s.active, 1);
    }

    #[test]
    fn test_order_independence() {
        let a = metric("10", "1", "2", Status::Active);
        let b = metric("20", "2", "3", Status::Stopped);
        let c = metric("30", "", "4", Status::Active);
        let forward = summarize(&[a.clone(), b.clone(), c.clone()]);
        let reverse = summarize(&[c, b, a]);
        assert_eq!(forward, reverse);
    }
}
