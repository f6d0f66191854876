pub mod risk;
pub mod score;

use crate::error::Result;
use crate::types::assessment::Assessment;
use crate::types::factors::ResilienceFactors;
use tracing::debug;

/// Runs one evaluation: score the factors, classify the score, and
/// assemble the assessment. Pure apart from the log event; a fresh call
/// per input is the whole lifecycle.
pub fn evaluate(factors: &ResilienceFactors) -> Result<Assessment> {
    let profile = score::normalized_profile(factors);
    let value = score::compute_score(factors);
    let (tier, recommendation) = risk::classify(value)?;
    debug!(score = value, tier = tier.as_str(), "evaluated factor set");

    Ok(Assessment {
        score: value,
        tier,
        recommendation: recommendation.to_string(),
        profile,
    })
}
