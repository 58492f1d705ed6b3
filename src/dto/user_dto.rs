use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{NewUser, User, UserChanges};
use crate::utils::validation::normalize_email;

fn default_active() -> bool {
    true
}

fn normalized_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|email| normalize_email(&email))
}

fn normalized_email_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|email| email.as_deref().map(normalize_email))
}

/// Tells an explicit `null` (`Some(None)`) apart from an absent key (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `POST /users` and `PUT /users/{id}`: the complete set of mutable fields.
/// The email is normalized while decoding, so validation sees the stored form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    #[validate(
        length(min = 2, max = 50),
        custom(function = "crate::utils::validation::validate_name")
    )]
    pub name: String,
    #[validate(email, length(max = 254))]
    #[serde(deserialize_with = "normalized_email")]
    pub email: String,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Accepted for compatibility and checked for length; never stored or returned.
    #[validate(length(min = 8, max = 128))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Body of `PATCH /users/{id}`: only the present keys are applied.
/// `"age": null` clears the age; leaving the key out keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserPayload {
    #[validate(
        length(min = 2, max = 50),
        custom(function = "crate::utils::validation::validate_name")
    )]
    pub name: Option<String>,
    #[validate(email, length(max = 254))]
    #[serde(default, deserialize_with = "normalized_email_opt")]
    pub email: Option<String>,
    #[validate(range(min = 0, max = 150))]
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,
    pub is_active: Option<bool>,
    #[validate(length(min = 8, max = 128))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// One of `validation_error`, `not_found`, `conflict`, `internal_error`.
    pub error: String,
    pub message: String,
}

impl From<UserPayload> for NewUser {
    fn from(p: UserPayload) -> Self {
        Self {
            name: p.name,
            email: p.email,
            age: p.age,
            is_active: p.is_active,
        }
    }
}

impl From<UpdateUserPayload> for UserChanges {
    fn from(p: UpdateUserPayload) -> Self {
        Self {
            name: p.name,
            email: p.email,
            age: p.age,
            is_active: p.is_active,
        }
    }
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            age: u.age,
            is_active: u.is_active,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
