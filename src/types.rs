//! Model types for the analytics engine.
//!
//! Raw records arrive from the dashboard API exactly as the upstream system
//! emits them (free-text phones, relative-date labels). Enriched records are
//! derived fresh on every refresh and never mutated in place. All status-like
//! values are closed enums so the decision tables in `health`, `lifecycle`
//! and `query` stay exhaustively checkable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One customer row as delivered by the dashboard API.
///
/// Every field is free text from the upstream system; nothing here is
/// validated beyond JSON shape. `first_activity_label` / `last_activity_label`
/// are relative-date strings ("7 days ago", "3 months ago") or the sentinel
/// `"-"` meaning "never".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCustomer {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub profile_count: u32,
    #[serde(default)]
    pub first_activity_label: String,
    #[serde(default)]
    pub last_activity_label: String,
    #[serde(default)]
    pub version_label: String,
    #[serde(default)]
    pub region_label: String,
    #[serde(default)]
    pub city_label: String,
}

/// Health status tier derived from the 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    AtRisk,
    Critical,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::AtRisk => "at_risk",
            HealthStatus::Critical => "critical",
        }
    }
}

/// Composite health assessment for one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    /// Weighted score, always an integer in [0, 100].
    pub score: u8,
    pub status: HealthStatus,
    /// Human-readable contributing factors, capped at 2.
    pub factors: Vec<String>,
}

/// Where a customer sits in the adoption/retention journey.
/// Exactly one stage per customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    New,
    Activated,
    Engaged,
    PowerUser,
    Fading,
    Dormant,
}

impl LifecycleStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStage::New => "new",
            LifecycleStage::Activated => "activated",
            LifecycleStage::Engaged => "engaged",
            LifecycleStage::PowerUser => "power_user",
            LifecycleStage::Fading => "fading",
            LifecycleStage::Dormant => "dormant",
        }
    }
}

/// Independent risk/opportunity annotations. A customer can carry any
/// combination; `no_first_activity` and `recovered` never co-occur because
/// `recovered` requires activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTag {
    NoFirstActivity,
    SuddenDrop,
    LowAdoption,
    HighPotential,
    Recovered,
}

impl RiskTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTag::NoFirstActivity => "no_first_activity",
            RiskTag::SuddenDrop => "sudden_drop",
            RiskTag::LowAdoption => "low_adoption",
            RiskTag::HighPotential => "high_potential",
            RiskTag::Recovered => "recovered",
        }
    }
}

/// The single next customer-success action for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    SendTip,
    CheckIn,
    ImmediateOutreach,
    RecoveryFollowup,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::SendTip => "send_tip",
            RecommendedAction::CheckIn => "check_in",
            RecommendedAction::ImmediateOutreach => "immediate_outreach",
            RecommendedAction::RecoveryFollowup => "recovery_followup",
        }
    }
}

/// Fully derived view of one customer. Produced by `enrich::enrich_customer`
/// as a pure function of the raw record — recomputed on every refresh,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCustomer {
    #[serde(flatten)]
    pub raw: RawCustomer,
    /// Best-guess country from the phone number; empty string when unknown.
    pub country: String,
    /// Days since last activity. `None` means never active or unparseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_inactive: Option<i64>,
    /// Days since first activity. `None` when the label did not parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure_days: Option<i64>,
    pub has_ever_been_active: bool,
    pub health: Health,
    pub lifecycle_stage: LifecycleStage,
    pub risk_tags: BTreeSet<RiskTag>,
    pub recommended_action: RecommendedAction,
}
