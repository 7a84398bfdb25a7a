use crate::models::Funnel;

/// One stage of the sales funnel: its count and, for every stage after the
/// first, the preceding stage's count as conversion baseline.
pub struct FunnelStep {
    pub label: &'static str,
    pub value: u64,
    pub previous: Option<u64>,
}

/// The six pipeline stages in display order.
pub fn steps(funnel: &Funnel) -> Vec<FunnelStep> {
    vec![
        FunnelStep {
            label: "Wyświetlenia",
            value: funnel.impressions,
            previous: None,
        },
        FunnelStep {
            label: "Zasięg",
            value: funnel.reach,
            previous: Some(funnel.impressions),
        },
        FunnelStep {
            label: "Kliknięcia",
            value: funnel.clicks,
            previous: Some(funnel.reach),
        },
        FunnelStep {
            label: "Inicjacja zakupu",
            value: funnel.checkout_init,
            previous: Some(funnel.clicks),
        },
        FunnelStep {
            label: "Dodanie do koszyka",
            value: funnel.add_to_cart,
            previous: Some(funnel.checkout_init),
        },
        FunnelStep {
            label: "Wyniki",
            value: funnel.results,
            previous: Some(funnel.add_to_cart),
        },
    ]
}

/// Top-of-funnel count used as the bar maximum and fallback baseline.
pub fn max_value(funnel: &Funnel) -> u64 {
    funnel.impressions
}

/// Step-over-baseline conversion percentage. A zero or absent baseline falls
/// back to the funnel maximum; a zero effective baseline yields 0 rather
/// than a fault.
pub fn step_percentage(step: &FunnelStep, max_value: u64) -> f64 {
    let baseline = match step.previous {
        Some(previous) if previous > 0 => previous,
        _ => max_value,
    };
    if baseline == 0 {
        return 0.0;
    }
    step.value as f64 / baseline as f64 * 100.0
}

/// Bar fill against the top of the funnel, in 0..=100 (0 when the funnel is
/// empty).
pub fn fill_ratio(value: u64, max_value: u64) -> f64 {
    if max_value == 0 {
        return 0.0;
    }
    value as f64 / max_value as f64 * 100.0
}
