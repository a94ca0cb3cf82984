//! Query descriptors and the pagination engine
//!
//! Raw, optional string filter parameters normalize into bounded query
//! descriptors. Empty or absent fields mean "no constraint" rather than an
//! empty-string match. Unrecognized sort keys and unparseable dates fail
//! closed with a validation error instead of being silently dropped.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{PostCategory, ReportReason, ReportStatus, SecurityEventType, TargetType};
use crate::error::DomainError;

/// Default page size when the caller sends none
pub const DEFAULT_LIMIT: i64 = 20;
/// Hard upper bound on page size
pub const MAX_LIMIT: i64 = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Allow-listed sort keys for post listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSortKey {
    #[default]
    CreatedAt,
    Views,
    Likes,
    Title,
}

impl PostSortKey {
    pub const fn as_column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Views => "views",
            Self::Likes => "likes",
            Self::Title => "title",
        }
    }

    /// Fails closed: anything outside the allow-list is a validation error,
    /// never a silent default.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "views" => Ok(Self::Views),
            "likes" => Ok(Self::Likes),
            "title" => Ok(Self::Title),
            other => Err(DomainError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Allow-listed sort keys for report listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl ReportSortKey {
    pub const fn as_column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            other => Err(DomainError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Inclusive date range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Parse optional raw bounds. Accepts RFC 3339 timestamps or plain
    /// `YYYY-MM-DD` dates; a plain upper-bound date extends to the end of
    /// that day so both bounds stay inclusive.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            from: from.map(|s| parse_date_bound(s, false)).transpose()?,
            to: to.map(|s| parse_date_bound(s, true)).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

fn parse_date_bound(s: &str, upper: bool) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        let time = if upper {
            date.and_hms_milli_opt(23, 59, 59, 999)
        } else {
            date.and_hms_opt(0, 0, 0)
        };
        if let Some(naive) = time {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    Err(DomainError::InvalidDate(s.to_string()))
}

/// Validated page window: page >= 1, limit clamped to [1, MAX_LIMIT]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: DEFAULT_LIMIT }
    }
}

impl PageRequest {
    /// Normalize raw numbers: non-positive or absent values fall back to the
    /// defaults, oversized limits clamp to the maximum.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let limit = limit
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        Self { page, limit }
    }

    #[inline]
    pub const fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Page window plus total-count metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl<T> Page<T> {
    /// Build a page from fetched items and the collection total.
    ///
    /// `pages == ceil(total / limit)`; a request past the last page yields an
    /// empty item list with unchanged, correct metadata.
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        debug_assert!(items.len() as i64 <= request.limit);
        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
            // limit is clamped >= 1, so the manual ceiling cannot divide by zero
            pages: (total + request.limit - 1) / request.limit,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            pages: self.pages,
        }
    }
}

/// Normalized descriptor for a post listing
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Case-insensitive partial match against the title
    pub search: Option<String>,
    pub category: Option<PostCategory>,
    pub owner_id: Option<crate::value_objects::Snowflake>,
    pub range: DateRange,
    pub sort: PostSortKey,
    pub direction: SortDirection,
    pub page: PageRequest,
}

impl PostQuery {
    /// Normalize raw string parameters into a bounded descriptor
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        search: Option<String>,
        category: Option<String>,
        from: Option<String>,
        to: Option<String>,
        sort_by: Option<String>,
        sort_order: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Self, DomainError> {
        let category = match non_empty(category) {
            Some(raw) => Some(
                PostCategory::parse(&raw)
                    .ok_or_else(|| DomainError::ValidationError(format!("unknown category: {raw}")))?,
            ),
            None => None,
        };
        let sort = match non_empty(sort_by) {
            Some(raw) => PostSortKey::parse(&raw)?,
            None => PostSortKey::default(),
        };
        let direction = match non_empty(sort_order) {
            Some(raw) => SortDirection::parse(&raw)
                .ok_or_else(|| DomainError::ValidationError(format!("unknown sort order: {raw}")))?,
            None => SortDirection::default(),
        };
        let range = DateRange::parse(
            non_empty(from).as_deref(),
            non_empty(to).as_deref(),
        )?;

        Ok(Self {
            search: non_empty(search),
            category,
            owner_id: None,
            range,
            sort,
            direction,
            page: PageRequest::new(page, limit),
        })
    }
}

/// Normalized descriptor for a report listing
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub status: Option<ReportStatus>,
    pub target_type: Option<TargetType>,
    pub reason: Option<ReportReason>,
    pub range: DateRange,
    pub sort: ReportSortKey,
    pub direction: SortDirection,
    pub page: PageRequest,
}

impl ReportQuery {
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        status: Option<String>,
        target_type: Option<String>,
        reason: Option<String>,
        from: Option<String>,
        to: Option<String>,
        sort_by: Option<String>,
        sort_order: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Self, DomainError> {
        let status = match non_empty(status) {
            Some(raw) => Some(
                ReportStatus::parse(&raw)
                    .ok_or_else(|| DomainError::ValidationError(format!("unknown status: {raw}")))?,
            ),
            None => None,
        };
        let target_type = match non_empty(target_type) {
            Some(raw) => Some(
                TargetType::parse(&raw)
                    .ok_or_else(|| DomainError::ValidationError(format!("unknown target type: {raw}")))?,
            ),
            None => None,
        };
        let reason = match non_empty(reason) {
            Some(raw) => Some(
                ReportReason::parse(&raw)
                    .ok_or_else(|| DomainError::ValidationError(format!("unknown reason: {raw}")))?,
            ),
            None => None,
        };
        let sort = match non_empty(sort_by) {
            Some(raw) => ReportSortKey::parse(&raw)?,
            None => ReportSortKey::default(),
        };
        let direction = match non_empty(sort_order) {
            Some(raw) => SortDirection::parse(&raw)
                .ok_or_else(|| DomainError::ValidationError(format!("unknown sort order: {raw}")))?,
            None => SortDirection::default(),
        };
        let range = DateRange::parse(non_empty(from).as_deref(), non_empty(to).as_deref())?;

        Ok(Self {
            status,
            target_type,
            reason,
            range,
            sort,
            direction,
            page: PageRequest::new(page, limit),
        })
    }
}

/// Normalized descriptor for a security-log listing (admin console)
#[derive(Debug, Clone, Default)]
pub struct SecurityLogQuery {
    pub event_type: Option<SecurityEventType>,
    pub range: DateRange,
    pub page: PageRequest,
}

impl SecurityLogQuery {
    pub fn from_raw(
        event_type: Option<String>,
        from: Option<String>,
        to: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Self, DomainError> {
        let event_type = match non_empty(event_type) {
            Some(raw) => Some(
                SecurityEventType::parse(&raw)
                    .ok_or_else(|| DomainError::ValidationError(format!("unknown event type: {raw}")))?,
            ),
            None => None,
        };
        let range = DateRange::parse(non_empty(from).as_deref(), non_empty(to).as_deref())?;

        Ok(Self {
            event_type,
            range,
            page: PageRequest::new(page, limit),
        })
    }
}

/// Empty or whitespace-only parameters are "no constraint"
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
