use crate::types::assessment::Assessment;
use chrono::Utc;

pub fn to_markdown(assessment: &Assessment) -> String {
    let mut output = String::new();
    output.push_str("# Supply-Chain Resilience Report\n\n");
    output.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));
    output.push_str(&format!(
        "Resilience score: {:.2}/100\nRisk tier: {}\n\n",
        assessment.score,
        assessment.tier.as_str()
    ));

    output.push_str("## Recommended Action\n\n");
    output.push_str(&format!("{}\n\n", assessment.recommendation));

    output.push_str("## Resilience Profile\n\n");
    let profile = &assessment.profile;
    output.push_str(&format!(
        "- supplier_count: {:.2}\n- geo_spread: {:.2}\n- cost_volatility: {:.2}\n- lead_time: {:.2}\n- alt_supplier_options: {:.2}\n",
        profile.supplier_count,
        profile.geo_spread,
        profile.cost_volatility,
        profile.lead_time,
        profile.alt_supplier_options
    ));

    output
}
