//! Lifecycle classification, risk tagging, and the next-action decision.
//!
//! Three small pure rule tables over the same derived signals:
//! - `classify_stage` picks exactly one lifecycle stage, first match wins.
//! - `derive_risk_tags` evaluates every tag rule independently.
//! - `recommend_action` maps (health status, stage, tags) to one follow-up.

use std::collections::BTreeSet;

use crate::types::{HealthStatus, LifecycleStage, RecommendedAction, RiskTag};

/// Assign the lifecycle stage. Decision order is significant: inactivity
/// trumps adoption signals, so a five-profile customer gone quiet for three
/// weeks is `dormant`, not `power_user`.
pub fn classify_stage(
    tenure_days: Option<i64>,
    days_inactive: Option<i64>,
    profile_count: u32,
    has_ever_been_active: bool,
) -> LifecycleStage {
    let tenure = tenure_days.unwrap_or(0);
    let inactive = days_inactive;

    if !has_ever_been_active {
        return if tenure <= 30 {
            LifecycleStage::New
        } else {
            LifecycleStage::Dormant
        };
    }
    if matches!(inactive, Some(d) if d > 14) {
        return LifecycleStage::Dormant;
    }
    if matches!(inactive, Some(d) if d > 7) {
        return LifecycleStage::Fading;
    }
    if profile_count >= 5 && matches!(inactive, Some(d) if d <= 7) {
        return LifecycleStage::PowerUser;
    }
    if matches!(inactive, Some(d) if d <= 7) && tenure > 30 {
        return LifecycleStage::Engaged;
    }
    if tenure <= 60 {
        return LifecycleStage::Activated;
    }
    LifecycleStage::Engaged
}

/// Evaluate every risk/opportunity rule. The rules are independent and the
/// result is a set, so a customer can be both `high_potential` and
/// `sudden_drop` at the same time.
pub fn derive_risk_tags(
    tenure_days: Option<i64>,
    days_inactive: Option<i64>,
    profile_count: u32,
    has_ever_been_active: bool,
) -> BTreeSet<RiskTag> {
    let tenure = tenure_days.unwrap_or(0);
    let mut tags = BTreeSet::new();

    if !has_ever_been_active {
        tags.insert(RiskTag::NoFirstActivity);
    }
    if profile_count >= 5 {
        tags.insert(RiskTag::HighPotential);
    }
    if has_ever_been_active
        && profile_count >= 2
        && matches!(days_inactive, Some(d) if d > 14)
    {
        tags.insert(RiskTag::SuddenDrop);
    }
    if profile_count <= 1 && tenure > 90 && has_ever_been_active {
        tags.insert(RiskTag::LowAdoption);
    }
    if tenure > 90 && matches!(days_inactive, Some(d) if d <= 7) {
        tags.insert(RiskTag::Recovered);
    }

    tags
}

/// Pick the single recommended follow-up. Priority order, first match wins.
/// A `recovered` customer only gets the recovery follow-up while their health
/// is still below healthy — a fully healthy long-tenure customer who is
/// active today is business as usual, not a recovery case.
pub fn recommend_action(
    status: HealthStatus,
    stage: LifecycleStage,
    tags: &BTreeSet<RiskTag>,
) -> RecommendedAction {
    if status == HealthStatus::Critical || stage == LifecycleStage::Dormant {
        return RecommendedAction::ImmediateOutreach;
    }
    if tags.contains(&RiskTag::Recovered) && status != HealthStatus::Healthy {
        return RecommendedAction::RecoveryFollowup;
    }
    if status == HealthStatus::AtRisk || stage == LifecycleStage::Fading {
        return RecommendedAction::CheckIn;
    }
    RecommendedAction::SendTip
}
