/*
 * Copyright 2019-2021 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fmt::{self, Debug, Formatter};

use crate::id::Identifier;
use crate::repo::common::Expiring;
use crate::repo::entity::EntityRepo;
use crate::store::EntityStore;
use crate::{Error, Result};

/// A repository of entities with a time-to-live.
///
/// An `ExpiringRepo` wraps an [`EntityRepo`] and gates its writes on the entity's
/// [`Ttl`]. An entity whose TTL is zero expires immediately, so storing it is pointless:
/// create and update skip the existence check and the backend write entirely, still run
/// the "after" observers, and return the unpersisted entity without error. Entities with
/// any other TTL go through the normal lifecycle; the backing store is responsible for
/// honoring the TTL by expiring the written record (or never expiring it for
/// [`Ttl::Never`]).
///
/// Reads and deletes are unaffected by TTLs and delegate to the wrapped repository.
///
/// [`Ttl`]: crate::repo::Ttl
/// [`Ttl::Never`]: crate::repo::Ttl::Never
pub struct ExpiringRepo<T: Expiring, S: EntityStore<T>> {
    repo: EntityRepo<T, S>,
}

impl<T: Expiring, S: EntityStore<T>> ExpiringRepo<T, S> {
    /// Create a new expiring repository wrapping `repo`.
    pub fn new(repo: EntityRepo<T, S>) -> Self {
        Self { repo }
    }

    /// Create `entity` in the store, returning the persisted entity.
    ///
    /// If the entity's TTL is zero, nothing is written and the entity is returned as-is
    /// after the observers run. Otherwise this behaves like [`EntityRepo::create`].
    ///
    /// # Errors
    /// - `Error::AlreadyExists`: An entity with this identifier already exists.
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn create(&self, mut entity: T) -> Result<T> {
        self.repo.notify_before_create(&mut entity)?;
        if entity.ttl().expires_immediately() {
            self.repo.notify_after_create(&mut entity)?;
            return Ok(entity);
        }
        let id = entity.id();
        if !id.is_empty() && self.repo.store().exists(&id)? {
            return Err(Error::AlreadyExists);
        }
        let mut created = self.repo.store().create_entity(entity)?;
        self.repo.notify_after_create(&mut created)?;
        Ok(created)
    }

    /// Create `entity` without checking whether its identifier already exists.
    ///
    /// If the entity's TTL is zero, nothing is written and the entity is returned as-is
    /// after the observers run.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn create_unchecked(&self, mut entity: T) -> Result<T> {
        self.repo.notify_before_create(&mut entity)?;
        if entity.ttl().expires_immediately() {
            self.repo.notify_after_create(&mut entity)?;
            return Ok(entity);
        }
        let mut created = self.repo.store().create_entity(entity)?;
        self.repo.notify_after_create(&mut created)?;
        Ok(created)
    }

    /// Update `entity` in the store, returning the persisted entity.
    ///
    /// If the entity's TTL is zero, nothing is written and the entity is returned as-is
    /// after the observers run. Otherwise this behaves like [`EntityRepo::update`].
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn update(&self, mut entity: T) -> Result<T> {
        self.repo.notify_before_update(&mut entity)?;
        if entity.ttl().expires_immediately() {
            self.repo.notify_after_update(&mut entity)?;
            return Ok(entity);
        }
        if !self.repo.store().exists(&entity.id())? {
            return Err(Error::NotFound);
        }
        let mut updated = self.repo.store().update_entity(entity)?;
        self.repo.notify_after_update(&mut updated)?;
        Ok(updated)
    }

    /// Update `entity` without checking that it already exists.
    ///
    /// If the entity's TTL is zero, nothing is written and the entity is returned as-is
    /// after the observers run.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn update_unchecked(&self, mut entity: T) -> Result<T> {
        self.repo.notify_before_update(&mut entity)?;
        if entity.ttl().expires_immediately() {
            self.repo.notify_after_update(&mut entity)?;
            return Ok(entity);
        }
        let mut updated = self.repo.store().update_entity(entity)?;
        self.repo.notify_after_update(&mut updated)?;
        Ok(updated)
    }

    /// Read the entity with the given `id`.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn read(&self, id: &Identifier) -> Result<T> {
        self.repo.read(id)
    }

    /// Read the entities with the given `ids`, omitting identifiers with no entity.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn read_list<'a, I>(&self, ids: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        self.repo.read_list(ids)
    }

    /// Delete `entity` from the store.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn delete(&self, entity: T) -> Result<()> {
        self.repo.delete(entity)
    }

    /// Delete the entity with the given `id`.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn delete_by_id(&self, id: &Identifier) -> Result<()> {
        self.repo.delete_by_id(id)
    }

    /// Return whether an entity with the given `id` exists.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn exists(&self, id: &Identifier) -> Result<bool> {
        self.repo.exists(id)
    }

    /// Parse an external identifier string with the installed adapter.
    ///
    /// # Errors
    /// - `Error::InvalidId`: The string was empty or not well-formed for the adapter.
    pub fn parse_id(&self, raw: &str) -> Result<Identifier> {
        self.repo.parse_id(raw)
    }

    /// Format `id` as an external string with the installed adapter.
    pub fn format_id(&self, id: &Identifier) -> Option<String> {
        self.repo.format_id(id)
    }

    /// The wrapped repository.
    pub fn repo(&self) -> &EntityRepo<T, S> {
        &self.repo
    }

    /// Consume this repository and return the wrapped repository.
    pub fn into_repo(self) -> EntityRepo<T, S> {
        self.repo
    }

    /// The store backing this repository.
    pub fn store(&self) -> &S {
        self.repo.store()
    }
}

impl<T: Expiring, S: EntityStore<T>> Debug for ExpiringRepo<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringRepo")
            .field("repo", &self.repo)
            .finish()
    }
}
