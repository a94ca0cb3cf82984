//! Listing query parameter extractors
//!
//! Raw query strings normalize into the bounded domain descriptors.
//! Unknown filter and sort values fail closed as 400s.

use quill_core::{PostQuery, ReportQuery, SecurityLogQuery};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query parameters for the post listing
#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PostListParams {
    pub fn into_query(self) -> Result<PostQuery, ApiError> {
        PostQuery::from_raw(
            self.search,
            self.category,
            self.from,
            self.to,
            self.sort_by,
            self.sort_order,
            self.page,
            self.limit,
        )
        .map_err(|e| ApiError::invalid_query(e.to_string()))
    }
}

/// Raw query parameters for the report queue listing
#[derive(Debug, Default, Deserialize)]
pub struct ReportListParams {
    pub status: Option<String>,
    pub target_type: Option<String>,
    pub reason: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ReportListParams {
    pub fn into_query(self) -> Result<ReportQuery, ApiError> {
        ReportQuery::from_raw(
            self.status,
            self.target_type,
            self.reason,
            self.from,
            self.to,
            self.sort_by,
            self.sort_order,
            self.page,
            self.limit,
        )
        .map_err(|e| ApiError::invalid_query(e.to_string()))
    }
}

/// Raw query parameters for the security-log listing
#[derive(Debug, Default, Deserialize)]
pub struct SecurityLogListParams {
    pub event_type: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl SecurityLogListParams {
    pub fn into_query(self) -> Result<SecurityLogQuery, ApiError> {
        SecurityLogQuery::from_raw(self.event_type, self.from, self.to, self.page, self.limit)
            .map_err(|e| ApiError::invalid_query(e.to_string()))
    }
}
