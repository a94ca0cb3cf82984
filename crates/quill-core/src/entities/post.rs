//! Post entity - an authored article

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Snowflake;

/// Closed category set for posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    Tech,
    Lifestyle,
    Travel,
    Food,
    Opinion,
    #[default]
    Other,
}

impl PostCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Lifestyle => "lifestyle",
            Self::Travel => "travel",
            Self::Food => "food",
            Self::Opinion => "opinion",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tech" => Some(Self::Tech),
            "lifestyle" => Some(Self::Lifestyle),
            "travel" => Some(Self::Travel),
            "food" => Some(Self::Food),
            "opinion" => Some(Self::Opinion),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity
///
/// Counters only move up; the single exception is moderation delete, which
/// removes the whole row (with a recorded reason).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub views: i64,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: Snowflake,
        owner_id: Snowflake,
        title: String,
        content: String,
        category: PostCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            title,
            content,
            category,
            views: 0,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for cat in [
            PostCategory::Tech,
            PostCategory::Lifestyle,
            PostCategory::Travel,
            PostCategory::Food,
            PostCategory::Opinion,
            PostCategory::Other,
        ] {
            assert_eq!(PostCategory::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(PostCategory::parse("sports"), None);
    }

    #[test]
    fn test_ownership() {
        let post = Post::new(
            Snowflake::new(1),
            Snowflake::new(7),
            "title".to_string(),
            "body".to_string(),
            PostCategory::Tech,
        );
        assert!(post.is_owned_by(Snowflake::new(7)));
        assert!(!post.is_owned_by(Snowflake::new(8)));
    }
}
