use crate::engine::risk::RiskTier;
use serde::Serialize;

/// Per-factor normalized components on [0, 1], direction-corrected so
/// that higher is always better. This is the resilience profile a
/// renderer can plot directly.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FactorProfile {
    pub supplier_count: f64,
    pub geo_spread: f64,
    pub cost_volatility: f64,
    pub lead_time: f64,
    pub alt_supplier_options: f64,
}

impl FactorProfile {
    pub fn components(&self) -> [f64; 5] {
        [
            self.supplier_count,
            self.geo_spread,
            self.cost_volatility,
            self.lead_time,
            self.alt_supplier_options,
        ]
    }
}

/// The full result of one evaluation: score, tier, recommended action,
/// and the profile the score was derived from. Recomputed per input,
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub score: f64,
    pub tier: RiskTier,
    pub recommendation: String,
    pub profile: FactorProfile,
}

/// One schema problem in an input file, reported by `lint`.
#[derive(Debug, Clone)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub row: Option<usize>,
}
