//! In-memory repositories
//!
//! The process-local stand-ins for a database. Each store owns its records
//! behind a `tokio::sync::RwLock` and is constructed once at startup, then
//! handed to handlers through the shared application state.

pub mod fixtures;

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::models::User;

/// A record with an integer primary key assigned by the repository
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Generic keyed-record repository used identically by posts, categories
/// and comments.
pub struct Repository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Repository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Insert a record, assigning the next free id. Returns the stored copy.
    pub async fn insert(&self, mut record: T) -> T {
        let mut records = self.records.write().await;
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        record.set_id(next_id);
        records.push(record.clone());
        record
    }

    pub async fn find_by_id(&self, id: i64) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// All records matching a predicate, in insertion order
    pub async fn find(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    pub async fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| predicate(r))
            .cloned()
    }

    /// Mutate the record with the given id under the write lock. Returns the
    /// updated copy, or None if the id is unknown.
    pub async fn update(&self, id: i64, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id() == id)?;
        mutate(record);
        Some(record.clone())
    }

    /// Remove and return the record with the given id
    pub async fn delete(&self, id: i64) -> Option<T> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(index))
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Credential store: identities keyed by email for O(1) lookup
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn seeded(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.email.clone(), u)).collect()),
        }
    }

    /// Insert a new identity. Fails with Conflict if the email is taken.
    /// Assigns the next free id.
    pub async fn insert(&self, mut user: User) -> Result<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(Error::Conflict("Email already registered".to_string()));
        }
        let next_id = users.values().map(|u| u.id).max().unwrap_or(0) + 1;
        user.id = next_id;
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.get(email).cloned()
    }

    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.id == id)
            .cloned()
    }

    /// Replace the identity with the same id. Handles email changes by
    /// re-keying; moving onto another identity's email is a Conflict.
    pub async fn update(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;
        if let Some(existing) = users.get(&user.email) {
            if existing.id != user.id {
                return Err(Error::Conflict("Email already registered".to_string()));
            }
        }
        let old_email = users
            .values()
            .find(|u| u.id == user.id)
            .map(|u| u.email.clone())
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        users.remove(&old_email);
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    /// Remove and return the identity with the given id
    pub async fn remove(&self, id: i64) -> Option<User> {
        let mut users = self.users.write().await;
        let email = users.values().find(|u| u.id == id)?.email.clone();
        users.remove(&email)
    }

    pub async fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
