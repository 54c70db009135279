//! Input-contract parsing for the usage feed.
//!
//! The dashboard fetches a JSON body with a `users` collection plus aggregate
//! stats; transport (and retry on failure) is the caller's problem. This
//! module only validates shape — a body that parses here is safe to hand to
//! `enrich::enrich_all`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::SnapshotError;
use crate::types::RawCustomer;

/// One refresh of the upstream feed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    pub users: Vec<RawCustomer>,
    /// Server-side rollups; advisory only, the dashboard recomputes its own
    /// from the enriched collection (`stats::summarize`).
    #[serde(default)]
    pub stats: Option<UpstreamStats>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Aggregate numbers the server sends alongside the rows.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamStats {
    #[serde(default)]
    pub total_users: Option<u64>,
    #[serde(default)]
    pub active_today: Option<u64>,
    #[serde(default)]
    pub new_this_week: Option<u64>,
}

/// Parse a fetched response body into a snapshot.
pub fn parse_snapshot(body: &str) -> Result<UsageSnapshot, SnapshotError> {
    if body.trim().is_empty() {
        return Err(SnapshotError::EmptyBody);
    }
    let snapshot: UsageSnapshot = serde_json::from_str(body)?;
    if snapshot.stats.is_none() {
        log::debug!("snapshot carries no server-side stats; recomputing locally");
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_snapshot() {
        let body = r#"{
            "generatedAt": "2026-02-04T08:30:00Z",
            "stats": { "totalUsers": 2, "activeToday": 1 },
            "users": [
                {
                    "id": "u1",
                    "displayName": "Dana Levi",
                    "phoneNumber": "050-123-4567",
                    "profileCount": 4,
                    "firstActivityLabel": "3 months ago",
                    "lastActivityLabel": "2 days ago",
                    "versionLabel": "2.1.0",
                    "regionLabel": "Center",
                    "cityLabel": "Tel Aviv"
                },
                { "id": "u2", "displayName": "Marco Rossi" }
            ]
        }"#;
        let snapshot = parse_snapshot(body).unwrap();
        assert_eq!(snapshot.users.len(), 2);
        assert_eq!(snapshot.users[0].profile_count, 4);
        assert_eq!(snapshot.stats.unwrap().total_users, Some(2));
        assert!(snapshot.generated_at.is_some());
    }

    #[test]
    fn stats_and_timestamp_are_optional() {
        let snapshot = parse_snapshot(r#"{"users": []}"#).unwrap();
        assert!(snapshot.users.is_empty());
        assert!(snapshot.stats.is_none());
        assert!(snapshot.generated_at.is_none());
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(matches!(parse_snapshot("  "), Err(SnapshotError::EmptyBody)));
    }

    #[test]
    fn missing_users_is_a_shape_error() {
        assert!(matches!(
            parse_snapshot(r#"{"stats": {}}"#),
            Err(SnapshotError::InvalidJson(_))
        ));
    }
}
