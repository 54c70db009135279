//! Aggregate rollups over the enriched collection.
//!
//! Header numbers for the dashboard plus the facet lists (distinct countries
//! and versions) that feed the exact-match filter dropdowns. Recomputed from
//! the enriched collection on every refresh, same as everything else.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{EnrichedCustomer, HealthStatus, LifecycleStage};

/// Collection-level summary for the dashboard header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total: usize,
    pub healthy: usize,
    pub at_risk: usize,
    pub critical: usize,
    /// Mean health score, rounded; 0 for an empty collection.
    pub average_score: u8,
    pub by_stage: BTreeMap<LifecycleStage, usize>,
    /// Distinct inferred countries, sorted, unknowns dropped.
    pub countries: Vec<String>,
    /// Distinct version labels, sorted, blanks dropped.
    pub versions: Vec<String>,
}

/// Roll up the enriched collection.
pub fn summarize(customers: &[EnrichedCustomer]) -> CollectionStats {
    let mut healthy = 0;
    let mut at_risk = 0;
    let mut critical = 0;
    let mut score_sum: u64 = 0;
    let mut by_stage: BTreeMap<LifecycleStage, usize> = BTreeMap::new();
    let mut countries: Vec<String> = Vec::new();
    let mut versions: Vec<String> = Vec::new();

    for customer in customers {
        match customer.health.status {
            HealthStatus::Healthy => healthy += 1,
            HealthStatus::AtRisk => at_risk += 1,
            HealthStatus::Critical => critical += 1,
        }
        score_sum += u64::from(customer.health.score);
        *by_stage.entry(customer.lifecycle_stage).or_default() += 1;
        if !customer.country.is_empty() {
            countries.push(customer.country.clone());
        }
        if !customer.raw.version_label.is_empty() {
            versions.push(customer.raw.version_label.clone());
        }
    }

    countries.sort();
    countries.dedup();
    versions.sort();
    versions.dedup();

    let average_score = if customers.is_empty() {
        0
    } else {
        (score_sum as f64 / customers.len() as f64).round() as u8
    };

    CollectionStats {
        total: customers.len(),
        healthy,
        at_risk,
        critical,
        average_score,
        by_stage,
        countries,
        versions,
    }
}
