use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Every mutable field of a user, as supplied on create or full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub is_active: bool,
}

/// Fields to merge into an existing user; `None` leaves the field untouched.
/// `age: Some(None)` clears the age.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<Option<i32>>,
    pub is_active: Option<bool>,
}

impl User {
    pub(crate) fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
    }

    pub(crate) fn replace(&mut self, fields: NewUser) {
        self.name = fields.name;
        self.email = fields.email;
        self.age = fields.age;
        self.is_active = fields.is_active;
    }
}
