//! Customer health and lifecycle analytics for the SalonPulse dashboard.
//!
//! A synchronous, side-effect-free engine: raw per-customer usage telemetry
//! (phone number, relative-date activity labels, profile count) goes in, an
//! enriched view comes out — health score, lifecycle stage, risk tags and a
//! recommended follow-up action — plus a filter/sort/paginate layer over the
//! enriched collection. No persistence, no I/O, no clock: everything is a
//! pure function of the inputs, recomputed whenever the raw collection or the
//! view parameters change.
//!
//! Typical flow:
//!
//! ```
//! use salonpulse_analytics::{enrich_all, json_loader, run_query, CustomerQuery};
//!
//! let body = r#"{"users": [{"id": "u1", "displayName": "Dana Levi",
//!     "phoneNumber": "0501234567", "profileCount": 6,
//!     "firstActivityLabel": "4 months ago", "lastActivityLabel": "1 day ago"}]}"#;
//! let snapshot = json_loader::parse_snapshot(body).unwrap();
//! let enriched = enrich_all(&snapshot.users);
//! let page = run_query(&enriched, &CustomerQuery::default());
//! assert_eq!(page.total_matching, 1);
//! ```

pub mod country;
pub mod enrich;
pub mod error;
pub mod health;
pub mod json_loader;
pub mod lifecycle;
pub mod parser;
pub mod query;
pub mod stats;
pub mod types;

pub use enrich::{enrich_all, enrich_customer};
pub use error::SnapshotError;
pub use query::{
    run_query, ActivityBucket, CustomerQuery, QueryPage, SortDirection, SortField, PAGE_SIZE,
};
pub use stats::{summarize, CollectionStats};
pub use types::{
    EnrichedCustomer, Health, HealthStatus, LifecycleStage, RawCustomer, RecommendedAction,
    RiskTag,
};
