use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::database::user_store::UserStore;
use crate::dto::user_dto::{UpdateUserPayload, UserPayload};
use crate::error::Result;
use crate::models::user::User;

#[derive(Clone, Default)]
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: UserPayload) -> Result<User> {
        let user = self.store.create(payload.into())?;
        info!(user_id = %user.id, email = %user.email, "user created");
        Ok(user)
    }

    pub fn get(&self, id: Uuid) -> Result<User> {
        self.store.get(id)
    }

    pub fn list(&self) -> Result<Vec<User>> {
        let users = self.store.list()?;
        debug!(count = users.len(), "users listed");
        Ok(users)
    }

    pub fn replace(&self, id: Uuid, payload: UserPayload) -> Result<User> {
        let user = self.store.update_full(id, payload.into())?;
        info!(user_id = %user.id, "user replaced");
        Ok(user)
    }

    pub fn update(&self, id: Uuid, payload: UpdateUserPayload) -> Result<User> {
        let user = self.store.update_partial(id, payload.into())?;
        info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete(id)?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn payload(email: &str) -> UserPayload {
        serde_json::from_value(json!({
            "name": "Alice",
            "email": email,
            "age": 30,
            "password": "correct-horse"
        }))
        .unwrap()
    }

    fn patch(body: serde_json::Value) -> UpdateUserPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn email_uniqueness_ignores_case() {
        let service = UserService::default();
        service.create(payload("alice@example.com")).unwrap();
        let err = service.create(payload("ALICE@example.com")).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn patch_email_is_normalized() {
        let service = UserService::default();
        let user = service.create(payload("alice@example.com")).unwrap();
        let updated = service
            .update(user.id, patch(json!({ "email": "Alice.New@Example.com" })))
            .unwrap();
        assert_eq!(updated.email, "alice.new@example.com");
    }

    #[test]
    fn patch_null_age_clears_it() {
        let service = UserService::default();
        let user = service.create(payload("alice@example.com")).unwrap();
        assert_eq!(user.age, Some(30));

        let kept = service.update(user.id, patch(json!({ "is_active": false }))).unwrap();
        assert_eq!(kept.age, Some(30));

        let cleared = service.update(user.id, patch(json!({ "age": null }))).unwrap();
        assert_eq!(cleared.age, None);
        assert_eq!(cleared.name, user.name);
    }

    #[test]
    fn replace_with_own_email_is_not_a_conflict() {
        let service = UserService::default();
        let user = service.create(payload("alice@example.com")).unwrap();
        let replaced = service.replace(user.id, payload("Alice@Example.com")).unwrap();
        assert_eq!(replaced.id, user.id);
    }
}
