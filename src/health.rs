//! Health scoring.
//!
//! Combines four weighted sub-scores (recency, frequency, adoption breadth,
//! engagement duration) into a single 0–100 score plus a status tier and a
//! short list of human-readable factors. The weights and thresholds were
//! tuned against observed customer behavior; downstream stages (status tier,
//! recommended action) depend on the exact numeric boundaries, so they are
//! kept literal rather than rationalized.

use crate::types::{Health, HealthStatus};

const WEIGHT_RECENCY: f64 = 0.40;
const WEIGHT_FREQUENCY: f64 = 0.25;
const WEIGHT_ADOPTION: f64 = 0.20;
const WEIGHT_ENGAGEMENT: f64 = 0.15;

const HEALTHY_THRESHOLD: u8 = 70;
const AT_RISK_THRESHOLD: u8 = 40;

const MAX_FACTORS: usize = 2;

/// Score one customer from their derived day counts and profile count.
///
/// Total over its domain: unknown inactivity/tenure degrade the individual
/// sub-scores rather than failing.
pub fn score_health(
    days_inactive: Option<i64>,
    tenure_days: Option<i64>,
    profile_count: u32,
) -> Health {
    let recency = recency_score(days_inactive);
    let frequency = frequency_score(days_inactive, tenure_days);
    let adoption = adoption_score(profile_count);
    let engagement = engagement_score(days_inactive, tenure_days);

    let weighted = recency * WEIGHT_RECENCY
        + frequency * WEIGHT_FREQUENCY
        + adoption * WEIGHT_ADOPTION
        + engagement * WEIGHT_ENGAGEMENT;
    let score = weighted.round().clamp(0.0, 100.0) as u8;

    let status = if score >= HEALTHY_THRESHOLD {
        HealthStatus::Healthy
    } else if score >= AT_RISK_THRESHOLD {
        HealthStatus::AtRisk
    } else {
        HealthStatus::Critical
    };

    Health {
        score,
        status,
        factors: build_factors(days_inactive, tenure_days, profile_count),
    }
}

/// Recency: step thresholds up to 30 days, then a slow linear decay.
fn recency_score(days_inactive: Option<i64>) -> f64 {
    match days_inactive {
        None => 0.0,
        Some(d) if d <= 1 => 100.0,
        Some(d) if d <= 7 => 85.0,
        Some(d) if d <= 14 => 55.0,
        Some(d) if d <= 30 => 25.0,
        Some(d) => (10.0 - (d - 30) as f64 / 10.0).max(0.0),
    }
}

/// Frequency: fraction of tenure spent active, boosted by 20% and capped.
/// With no usable tenure, a customer active today still gets partial credit.
fn frequency_score(days_inactive: Option<i64>, tenure_days: Option<i64>) -> f64 {
    match (days_inactive, tenure_days) {
        (Some(d), Some(t)) if t > 0 => {
            let active_fraction = (t - d) as f64 / t as f64;
            (active_fraction * 120.0).clamp(0.0, 100.0)
        }
        (Some(0), _) => 80.0,
        _ => 0.0,
    }
}

/// Adoption: stepped on the number of distinct profiles created.
fn adoption_score(profile_count: u32) -> f64 {
    match profile_count {
        0 => 0.0,
        1 => 30.0,
        2..=3 => 60.0,
        4..=5 => 80.0,
        _ => 100.0,
    }
}

/// Engagement: tenure-aware override ladder, first match wins top-down.
/// The order matters — a long-tenured recent user must hit the 100 branch
/// before the generic "recently active" 70 branch.
fn engagement_score(days_inactive: Option<i64>, tenure_days: Option<i64>) -> f64 {
    let tenure = tenure_days.unwrap_or(0);
    if tenure > 90 && matches!(days_inactive, Some(d) if d <= 7) {
        return 100.0;
    }
    if tenure > 180 && days_inactive.map_or(true, |d| d > 30) {
        return 10.0;
    }
    if matches!(days_inactive, Some(d) if d <= 14) {
        return 70.0;
    }
    50.0
}

/// Advisory factor strings, first-match-appended, capped at two.
fn build_factors(
    days_inactive: Option<i64>,
    tenure_days: Option<i64>,
    profile_count: u32,
) -> Vec<String> {
    let mut factors = Vec::new();
    let tenure = tenure_days.unwrap_or(0);

    match days_inactive {
        None => factors.push("Never mixed".to_string()),
        Some(d) if d > 14 => factors.push(format!("{}d inactive", d)),
        Some(d) if d > 7 => factors.push(format!("{}d since last mix", d)),
        _ => {}
    }

    if profile_count == 0 {
        factors.push("No profiles".to_string());
    } else if profile_count == 1 && tenure > 90 {
        factors.push(format!(
            "Still on a single profile after {} months",
            tenure / 30
        ));
    }

    if tenure > 180 && days_inactive.map_or(true, |d| d > 60) {
        factors.push("Long-tenured but barely engaged".to_string());
    }

    factors.truncate(MAX_FACTORS);
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_power_user_scores_perfect() {
        // recency 100, frequency 100 (capped), adoption 100, engagement 100
        let h = score_health(Some(0), Some(120), 6);
        assert_eq!(h.score, 100);
        assert_eq!(h.status, HealthStatus::Healthy);
        assert!(h.factors.is_empty());
    }

    #[test]
    fn never_active_scores_near_zero() {
        let h = score_health(None, None, 0);
        // recency 0, frequency 0, adoption 0, engagement 50 -> 7.5 -> 8
        assert_eq!(h.score, 8);
        assert_eq!(h.status, HealthStatus::Critical);
        assert_eq!(h.factors, vec!["Never mixed", "No profiles"]);
    }

    #[test]
    fn dormant_mid_tenure_customer_is_at_risk() {
        // recency 25, frequency (150-20)/150*120 = 104 -> 100,
        // adoption 60, engagement 50 -> 10 + 25 + 12 + 7.5 = 54.5 -> 55
        let h = score_health(Some(20), Some(150), 3);
        assert_eq!(h.score, 55);
        assert_eq!(h.status, HealthStatus::AtRisk);
        assert_eq!(h.factors, vec!["20d inactive"]);
    }

    #[test]
    fn recency_decays_linearly_past_thirty_days() {
        assert_eq!(recency_score(Some(30)), 25.0);
        assert_eq!(recency_score(Some(40)), 9.0);
        assert_eq!(recency_score(Some(130)), 0.0);
        assert_eq!(recency_score(Some(500)), 0.0);
    }

    #[test]
    fn frequency_gets_partial_credit_with_unknown_tenure() {
        assert_eq!(frequency_score(Some(0), None), 80.0);
        assert_eq!(frequency_score(Some(5), None), 0.0);
        assert_eq!(frequency_score(None, Some(100)), 0.0);
    }

    #[test]
    fn frequency_clamps_both_ends() {
        // More inactive days than tenure would go negative without the clamp.
        assert_eq!(frequency_score(Some(200), Some(100)), 0.0);
        assert_eq!(frequency_score(Some(0), Some(100)), 100.0);
    }

    #[test]
    fn engagement_override_order_is_top_down() {
        // tenure>90 and recent wins the 100 branch before the d<=14 branch
        assert_eq!(engagement_score(Some(5), Some(100)), 100.0);
        // tenure>180 and dormant
        assert_eq!(engagement_score(Some(40), Some(200)), 10.0);
        assert_eq!(engagement_score(None, Some(200)), 10.0);
        // recent but short tenure
        assert_eq!(engagement_score(Some(10), Some(20)), 70.0);
        // default
        assert_eq!(engagement_score(Some(20), Some(20)), 50.0);
    }

    #[test]
    fn score_is_always_in_bounds() {
        let extremes = [
            (None, None, 0),
            (Some(0), Some(0), 0),
            (Some(0), Some(10_000), 100),
            (Some(10_000), Some(1), 0),
            (Some(1), Some(1), 50),
        ];
        for (d, t, p) in extremes {
            let h = score_health(d, t, p);
            assert!(h.score <= 100, "score {} out of range", h.score);
        }
    }

    #[test]
    fn factors_are_capped_at_two() {
        // Never mixed + No profiles + long tenure message would be three.
        let h = score_health(None, Some(200), 0);
        assert_eq!(h.factors.len(), 2);
        assert_eq!(h.factors[0], "Never mixed");
    }

    #[test]
    fn single_profile_long_tenure_factor() {
        let h = score_health(Some(3), Some(120), 1);
        assert_eq!(h.factors, vec!["Still on a single profile after 4 months"]);
    }
}
