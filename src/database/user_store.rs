use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::{NewUser, User, UserChanges};
use crate::utils::time;

#[derive(Debug, Default)]
struct Records {
    by_id: HashMap<Uuid, User>,
    order: Vec<Uuid>,
}

impl Records {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.by_id
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }
}

/// In-memory collection of users. Lookups go through a map keyed by id;
/// `order` keeps creation order for listing.
///
/// All check-then-commit sequences run under a single write guard, so the
/// email uniqueness check and the mutation it protects cannot interleave with
/// another writer.
#[derive(Debug, Default)]
pub struct UserStore {
    records: RwLock<Records>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|_| Error::Internal("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|_| Error::Internal("user store lock poisoned".to_string()))
    }

    pub fn create(&self, fields: NewUser) -> Result<User> {
        let mut records = self.write()?;
        if records.email_taken(&fields.email, None) {
            return Err(email_conflict());
        }

        let now = time::now();
        let user = User {
            id: records.fresh_id(),
            name: fields.name,
            email: fields.email,
            age: fields.age,
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
        };
        records.order.push(user.id);
        records.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get(&self, id: Uuid) -> Result<User> {
        self.read()?
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Snapshot of every stored user in creation order.
    pub fn list(&self) -> Result<Vec<User>> {
        let records = self.read()?;
        Ok(records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .collect())
    }

    pub fn update_full(&self, id: Uuid, fields: NewUser) -> Result<User> {
        let mut records = self.write()?;
        if !records.by_id.contains_key(&id) {
            return Err(not_found(id));
        }
        if records.email_taken(&fields.email, Some(id)) {
            return Err(email_conflict());
        }

        let user = records.by_id.get_mut(&id).ok_or_else(|| not_found(id))?;
        user.replace(fields);
        user.updated_at = time::advance_from(user.updated_at);
        Ok(user.clone())
    }

    pub fn update_partial(&self, id: Uuid, changes: UserChanges) -> Result<User> {
        let mut records = self.write()?;
        if !records.by_id.contains_key(&id) {
            return Err(not_found(id));
        }
        if let Some(email) = &changes.email {
            if records.email_taken(email, Some(id)) {
                return Err(email_conflict());
            }
        }

        let user = records.by_id.get_mut(&id).ok_or_else(|| not_found(id))?;
        user.apply(changes);
        user.updated_at = time::advance_from(user.updated_at);
        Ok(user.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.write()?;
        if records.by_id.remove(&id).is_none() {
            return Err(not_found(id));
        }
        records.order.retain(|existing| *existing != id);
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.by_id.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn not_found(id: Uuid) -> Error {
    Error::NotFound(format!("User with ID {} not found", id))
}

fn email_conflict() -> Error {
    Error::Conflict("Email already registered".to_string())
}
