//! Generic per-entity state container.
//!
//! One parametrized container replaces the per-entity copies of the same
//! fetch/create/update/delete plumbing. Each container holds the
//! last-fetched collection plus one shared `loading` flag and one shared
//! `error` slot across all of its operations; a second operation starting
//! while another is in flight resets the first one's error. That shared
//! flag is a known simplification kept for parity with the admin console's
//! behavior.

use serde::{de::DeserializeOwned, Serialize};

use crate::api::{AdminCollection, ApiError};
use crate::models::Entity;

pub struct EntityStore<T> {
    api: AdminCollection<T>,
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T: Entity + DeserializeOwned + Clone> EntityStore<T> {
    pub fn new(api: AdminCollection<T>) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the full collection, replacing the in-memory items.
    pub async fn fetch(&mut self) -> Result<(), ApiError> {
        self.begin();
        match self.api.list().await {
            Ok(items) => {
                self.items = items;
                self.finish();
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Create a record from a draft payload and merge the server's copy
    /// into the collection.
    pub async fn create<B: Serialize>(&mut self, draft: &B) -> Result<T, ApiError> {
        self.begin();
        match self.api.create(draft).await {
            Ok(created) => {
                self.upsert(created.clone());
                self.finish();
                Ok(created)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Update a record by id and merge the server's copy into the
    /// collection.
    pub async fn update<B: Serialize>(&mut self, id: i64, draft: &B) -> Result<T, ApiError> {
        self.begin();
        match self.api.update(id, draft).await {
            Ok(updated) => {
                self.upsert(updated.clone());
                self.finish();
                Ok(updated)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Delete a record by id and drop it from the collection.
    pub async fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        self.begin();
        match self.api.delete(id).await {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                self.finish();
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Merge an externally-produced record (e.g. a consultation status
    /// update) into the collection by id. Idempotent: merging the same
    /// record twice leaves one copy.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self) {
        self.loading = false;
    }

    fn fail(&mut self, err: ApiError) -> ApiError {
        self.loading = false;
        self.error = Some(err.to_string());
        err
    }
}
