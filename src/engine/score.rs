use crate::types::assessment::FactorProfile;
use crate::types::factors::{ResilienceFactors, SCALE_MAX};

/// Maps each factor onto [0, 1] against the fixed 1-5 scale, inverting
/// the worse-when-high factors so every component reads "higher is
/// better".
pub fn normalized_profile(factors: &ResilienceFactors) -> FactorProfile {
    let max = SCALE_MAX as f64;
    FactorProfile {
        supplier_count: factors.supplier_count as f64 / max,
        geo_spread: factors.geo_spread as f64 / max,
        cost_volatility: (max - factors.cost_volatility as f64) / max,
        lead_time: (max - factors.lead_time as f64) / max,
        alt_supplier_options: factors.alt_supplier_options as f64 / max,
    }
}

/// Resilience score on [0, 100]: the unweighted mean of the five
/// normalized components, rounded to 2 decimals. Each factor contributes
/// exactly 20%.
pub fn compute_score(factors: &ResilienceFactors) -> f64 {
    let profile = normalized_profile(factors);
    let components = profile.components();
    let mean = components.iter().sum::<f64>() / components.len() as f64;
    round2(mean * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
