//! Record enrichment — the one place the derivation pipeline is wired up.
//!
//! `enrich_customer` is a pure function of the raw record: parse the two
//! activity labels into day counts, infer the country, then run the scorer,
//! classifier, tagger and recommender over the derived signals. Two calls
//! with identical input always produce identical output — no clock, no
//! randomness, no ambient state.

use crate::country::infer_country;
use crate::health::score_health;
use crate::lifecycle::{classify_stage, derive_risk_tags, recommend_action};
use crate::parser::parse_days_ago;
use crate::types::{EnrichedCustomer, RawCustomer};

/// Derive the full analytics view for one customer.
pub fn enrich_customer(raw: &RawCustomer) -> EnrichedCustomer {
    let days_inactive = parse_days_ago(Some(&raw.last_activity_label));
    let tenure_days = parse_days_ago(Some(&raw.first_activity_label));
    // "Ever active" keys off the last-activity label: a customer with only a
    // signup date on record has never actually used the product.
    let has_ever_been_active = days_inactive.is_some();

    let country = infer_country(&raw.phone_number);
    let health = score_health(days_inactive, tenure_days, raw.profile_count);
    let lifecycle_stage = classify_stage(
        tenure_days,
        days_inactive,
        raw.profile_count,
        has_ever_been_active,
    );
    let risk_tags = derive_risk_tags(
        tenure_days,
        days_inactive,
        raw.profile_count,
        has_ever_been_active,
    );
    let recommended_action = recommend_action(health.status, lifecycle_stage, &risk_tags);

    EnrichedCustomer {
        raw: raw.clone(),
        country,
        days_inactive,
        tenure_days,
        has_ever_been_active,
        health,
        lifecycle_stage,
        risk_tags,
        recommended_action,
    }
}

/// Enrich a full refresh of raw records, preserving input order.
pub fn enrich_all(raws: &[RawCustomer]) -> Vec<EnrichedCustomer> {
    let enriched: Vec<EnrichedCustomer> = raws.iter().map(enrich_customer).collect();
    log::debug!("enriched {} customer records", enriched.len());
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HealthStatus, LifecycleStage, RecommendedAction, RiskTag};

    fn customer(
        id: &str,
        phone: &str,
        profiles: u32,
        first: &str,
        last: &str,
    ) -> RawCustomer {
        RawCustomer {
            id: id.to_string(),
            display_name: format!("Customer {}", id),
            phone_number: phone.to_string(),
            profile_count: profiles,
            first_activity_label: first.to_string(),
            last_activity_label: last.to_string(),
            version_label: "2.1.0".to_string(),
            region_label: String::new(),
            city_label: String::new(),
        }
    }

    #[test]
    fn enrichment_is_deterministic() {
        let raw = customer("u1", "0501234567", 3, "4 months ago", "2 days ago");
        let a = enrich_customer(&raw);
        let b = enrich_customer(&raw);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn healthy_power_user_end_to_end() {
        let raw = customer("u1", "0501234567", 6, "4 months ago", "5 hours ago");
        let e = enrich_customer(&raw);
        assert_eq!(e.days_inactive, Some(0));
        assert_eq!(e.tenure_days, Some(120));
        assert_eq!(e.country, "Israel");
        assert!(e.has_ever_been_active);
        assert_eq!(e.lifecycle_stage, LifecycleStage::PowerUser);
        assert_eq!(e.health.status, HealthStatus::Healthy);
        // Healthy throughout, so the recovered tag does not escalate the action.
        assert_eq!(e.recommended_action, RecommendedAction::SendTip);
    }

    #[test]
    fn never_active_signup_end_to_end() {
        let raw = customer("u2", "447911123456", 0, "10 days ago", "-");
        let e = enrich_customer(&raw);
        assert_eq!(e.days_inactive, None);
        assert_eq!(e.tenure_days, Some(10));
        assert!(!e.has_ever_been_active);
        assert_eq!(e.country, "UK");
        assert_eq!(e.lifecycle_stage, LifecycleStage::New);
        assert!(e.risk_tags.contains(&RiskTag::NoFirstActivity));
        assert_eq!(e.health.status, HealthStatus::Critical);
        assert_eq!(e.recommended_action, RecommendedAction::ImmediateOutreach);
    }

    #[test]
    fn dormant_mid_tenure_end_to_end() {
        let raw = customer("u3", "", 3, "5 months ago", "20 days ago");
        let e = enrich_customer(&raw);
        assert_eq!(e.tenure_days, Some(150));
        assert_eq!(e.days_inactive, Some(20));
        assert_eq!(e.lifecycle_stage, LifecycleStage::Dormant);
        assert_eq!(e.health.status, HealthStatus::AtRisk);
        // Dormant always escalates, whatever the exact score tier.
        assert_eq!(e.recommended_action, RecommendedAction::ImmediateOutreach);
        assert!(e.risk_tags.contains(&RiskTag::SuddenDrop));
    }

    #[test]
    fn unparseable_labels_degrade_not_fail() {
        let raw = customer("u4", "garbage", 2, "recently", "who knows");
        let e = enrich_customer(&raw);
        assert_eq!(e.days_inactive, None);
        assert_eq!(e.tenure_days, None);
        assert_eq!(e.country, "");
        assert!(!e.has_ever_been_active);
        assert_eq!(e.lifecycle_stage, LifecycleStage::New);
    }

    #[test]
    fn enrich_all_preserves_input_order() {
        let raws = vec![
            customer("b", "", 1, "1 day ago", "1 day ago"),
            customer("a", "", 1, "1 day ago", "1 day ago"),
        ];
        let enriched = enrich_all(&raws);
        assert_eq!(enriched[0].raw.id, "b");
        assert_eq!(enriched[1].raw.id, "a");
    }
}
