use crate::error::{Result, SupplysightError};
use serde::Serialize;

/// Risk tier bands, inclusive on the lower edge of each tier.
pub const LOW_RISK_THRESHOLD: f64 = 80.0;
pub const MEDIUM_RISK_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// The recommended action is a function of the tier alone.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk: Maintain strategy but monitor volatility.",
            RiskTier::Medium => "Medium Risk: Explore regional backups and reduce volatility.",
            RiskTier::High => "High Risk: Diversify supplier base and reduce lead times.",
        }
    }
}

/// Classifies a resilience score into a tier and its recommended action.
/// A score outside [0, 100] breaks the calculator's output contract and
/// is an error, not something to clamp.
pub fn classify(score: f64) -> Result<(RiskTier, &'static str)> {
    if !(0.0..=100.0).contains(&score) {
        return Err(SupplysightError::ScoreContract(score));
    }

    let tier = if score >= LOW_RISK_THRESHOLD {
        RiskTier::Low
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::High
    };
    Ok((tier, tier.recommendation()))
}
