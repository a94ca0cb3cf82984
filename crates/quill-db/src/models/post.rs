//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use quill_core::entities::{Post, PostCategory};
use quill_core::error::DomainError;
use quill_core::value_objects::Snowflake;

/// Database model for the posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub views: i64,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostModel> for Post {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        let category = PostCategory::parse(&model.category).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "unknown category in posts row: {}",
                model.category
            ))
        })?;

        Ok(Post {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            title: model.title,
            content: model.content,
            category,
            views: model.views,
            likes: model.likes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
