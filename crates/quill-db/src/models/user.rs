//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use quill_core::entities::User;
use quill_core::error::DomainError;
use quill_core::value_objects::{Role, Snowflake};

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub banned: bool,
    pub banned_at: Option<DateTime<Utc>>,
    pub banned_by: Option<i64>,
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = Role::parse(&model.role).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown role in users row: {}", model.role))
        })?;

        Ok(User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            role,
            banned: model.banned,
            banned_at: model.banned_at,
            banned_by: model.banned_by.map(Snowflake::new),
            ban_reason: model.ban_reason,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
