//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use quill_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with post_id
#[derive(Debug, serde::Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

impl PostIdPath {
    /// Parse post_id as Snowflake
    pub fn post_id(&self) -> Result<Snowflake, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}

/// Path parameters with report_id
#[derive(Debug, serde::Deserialize)]
pub struct ReportIdPath {
    pub report_id: String,
}

impl ReportIdPath {
    /// Parse report_id as Snowflake
    pub fn report_id(&self) -> Result<Snowflake, ApiError> {
        self.report_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid report_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters addressing a moderation target
#[derive(Debug, serde::Deserialize)]
pub struct ModerationTargetPath {
    pub target_type: String,
    pub target_id: String,
}

impl ModerationTargetPath {
    /// Parse target_type as a closed enum
    pub fn target_type(&self) -> Result<quill_core::entities::TargetType, ApiError> {
        quill_core::entities::TargetType::parse(&self.target_type)
            .ok_or_else(|| ApiError::invalid_path("Unknown target_type"))
    }

    /// Parse target_id as Snowflake
    pub fn target_id(&self) -> Result<Snowflake, ApiError> {
        self.target_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid target_id format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_snowflake() {
        let path = PostIdPath {
            post_id: "123456789".to_string(),
        };
        assert!(path.post_id().is_ok());
    }

    #[test]
    fn test_parse_invalid_snowflake() {
        let path = UserIdPath {
            user_id: "not-a-number".to_string(),
        };
        assert!(path.user_id().is_err());
    }

    #[test]
    fn test_parse_target_type() {
        let path = ModerationTargetPath {
            target_type: "post".to_string(),
            target_id: "42".to_string(),
        };
        assert!(path.target_type().is_ok());
        assert!(path.target_id().is_ok());

        let bad = ModerationTargetPath {
            target_type: "guild".to_string(),
            target_id: "42".to_string(),
        };
        assert!(bad.target_type().is_err());
    }
}
