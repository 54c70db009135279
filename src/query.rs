//! Filter, sort and paginate the enriched collection.
//!
//! `CustomerQuery` holds the view parameters; its mutators encode the UI
//! semantics (re-clicking a sort column flips direction, switching columns
//! resets to that column's default, any parameter change snaps back to page
//! one). `run_query` is a pure pass over the collection: predicates AND
//! together, the sort is stable, and the page index clamps instead of
//! erroring. Source records are never mutated.

use serde::{Deserialize, Serialize};

use crate::types::{EnrichedCustomer, HealthStatus, LifecycleStage};

/// Fixed page size for the customer table.
pub const PAGE_SIZE: usize = 25;

/// Inactivity buckets behind the status filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityBucket {
    /// Active within the last week.
    Active,
    /// Quiet for more than a week, up to two.
    AtRisk,
    /// Quiet for more than two weeks, up to a month.
    Critical,
    /// Gone for over a month, or never seen at all.
    Churned,
}

impl ActivityBucket {
    fn matches(self, days_inactive: Option<i64>) -> bool {
        match self {
            ActivityBucket::Active => matches!(days_inactive, Some(d) if d <= 7),
            ActivityBucket::AtRisk => matches!(days_inactive, Some(d) if d > 7 && d <= 14),
            ActivityBucket::Critical => matches!(days_inactive, Some(d) if d > 14 && d <= 30),
            ActivityBucket::Churned => days_inactive.map_or(true, |d| d > 30),
        }
    }
}

/// Sortable columns of the customer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Country,
    Version,
    ProfileCount,
    DaysInactive,
    Tenure,
    HealthScore,
}

impl SortField {
    /// Direction applied when this column first becomes the active sort.
    /// Score- and inactivity-style columns start ascending (worst first);
    /// everything else starts descending.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortField::HealthScore | SortField::DaysInactive | SortField::Tenure => {
                SortDirection::Asc
            }
            _ => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// View parameters for the customer table. All filter predicates AND
/// together. Construct with `Default`, then drive through the mutators so the
/// page-reset rules hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerQuery {
    /// Case-insensitive substring over name, phone and city.
    pub search: String,
    /// Exact match on the inferred country.
    pub country: Option<String>,
    /// Exact match on the version label.
    pub version: Option<String>,
    /// Exact match on lifecycle stage.
    pub stage: Option<LifecycleStage>,
    /// Inactivity bucket chip.
    pub activity: Option<ActivityBucket>,
    /// Quick toggle: health below healthy.
    pub needs_attention: bool,
    /// Quick toggle: lifecycle in {new, activated}.
    pub onboarding: bool,
    /// Quick toggle: five or more profiles.
    pub high_potential: bool,
    sort_field: SortField,
    sort_direction: SortDirection,
    page: usize,
}

impl Default for CustomerQuery {
    fn default() -> Self {
        CustomerQuery {
            search: String::new(),
            country: None,
            version: None,
            stage: None,
            activity: None,
            needs_attention: false,
            onboarding: false,
            high_potential: false,
            sort_field: SortField::Name,
            sort_direction: SortField::Name.default_direction(),
            page: 1,
        }
    }
}

impl CustomerQuery {
    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Click a column header: same column flips direction, a new column
    /// resets to its default direction. Either way the view snaps to page 1.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = field.default_direction();
        }
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country;
        self.page = 1;
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
        self.page = 1;
    }

    pub fn set_stage(&mut self, stage: Option<LifecycleStage>) {
        self.stage = stage;
        self.page = 1;
    }

    pub fn set_activity(&mut self, bucket: Option<ActivityBucket>) {
        self.activity = bucket;
        self.page = 1;
    }

    pub fn toggle_needs_attention(&mut self) {
        self.needs_attention = !self.needs_attention;
        self.page = 1;
    }

    pub fn toggle_onboarding(&mut self) {
        self.onboarding = !self.onboarding;
        self.page = 1;
    }

    pub fn toggle_high_potential(&mut self) {
        self.high_potential = !self.high_potential;
        self.page = 1;
    }

    /// Requested page index. Out-of-range values are clamped at query time,
    /// never rejected.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    fn accepts(&self, customer: &EnrichedCustomer) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let haystacks = [
                &customer.raw.display_name,
                &customer.raw.phone_number,
                &customer.raw.city_label,
            ];
            if !haystacks
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if &customer.country != country {
                return false;
            }
        }
        if let Some(version) = &self.version {
            if &customer.raw.version_label != version {
                return false;
            }
        }
        if let Some(stage) = self.stage {
            if customer.lifecycle_stage != stage {
                return false;
            }
        }
        if let Some(bucket) = self.activity {
            if !bucket.matches(customer.days_inactive) {
                return false;
            }
        }
        if self.needs_attention && customer.health.status == HealthStatus::Healthy {
            return false;
        }
        if self.onboarding
            && !matches!(
                customer.lifecycle_stage,
                LifecycleStage::New | LifecycleStage::Activated
            )
        {
            return false;
        }
        if self.high_potential && customer.raw.profile_count < 5 {
            return false;
        }
        true
    }
}

/// One page of the filtered, sorted view plus its metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    pub items: Vec<EnrichedCustomer>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_matching: usize,
}

/// Run the query over the enriched collection.
///
/// Pure: the input slice is untouched, the result is a fresh snapshot.
/// Recompute on any input or parameter change.
pub fn run_query(customers: &[EnrichedCustomer], query: &CustomerQuery) -> QueryPage {
    let mut matching: Vec<&EnrichedCustomer> =
        customers.iter().filter(|c| query.accepts(c)).collect();

    // sort_by is stable, so equal keys keep their input order; the reversed
    // comparator maps Equal to Equal and keeps that property for descending.
    let ascending = compare_for(query.sort_field);
    match query.sort_direction {
        SortDirection::Asc => matching.sort_by(|a, b| ascending(a, b)),
        SortDirection::Desc => matching.sort_by(|a, b| ascending(a, b).reverse()),
    }

    let total_matching = matching.len();
    let total_pages = total_matching.div_ceil(PAGE_SIZE).max(1);
    let current_page = query.page.clamp(1, total_pages);

    let start = (current_page - 1) * PAGE_SIZE;
    let items = matching
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    log::debug!(
        "query matched {} of {} customers (page {}/{})",
        total_matching,
        customers.len(),
        current_page,
        total_pages
    );

    QueryPage {
        items,
        current_page,
        total_pages,
        page_size: PAGE_SIZE,
        total_matching,
    }
}

type Comparator = fn(&EnrichedCustomer, &EnrichedCustomer) -> std::cmp::Ordering;

fn compare_for(field: SortField) -> Comparator {
    match field {
        SortField::Name => |a, b| cmp_text(&a.raw.display_name, &b.raw.display_name),
        SortField::Country => |a, b| cmp_text(&a.country, &b.country),
        SortField::Version => |a, b| cmp_text(&a.raw.version_label, &b.raw.version_label),
        SortField::ProfileCount => |a, b| a.raw.profile_count.cmp(&b.raw.profile_count),
        // Never-active sorts as maximally inactive.
        SortField::DaysInactive => |a, b| {
            a.days_inactive
                .unwrap_or(i64::MAX)
                .cmp(&b.days_inactive.unwrap_or(i64::MAX))
        },
        // Unknown tenure sorts below every real tenure.
        SortField::Tenure => |a, b| {
            a.tenure_days
                .unwrap_or(-1)
                .cmp(&b.tenure_days.unwrap_or(-1))
        },
        SortField::HealthScore => |a, b| a.health.score.cmp(&b.health.score),
    }
}

fn cmp_text(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
