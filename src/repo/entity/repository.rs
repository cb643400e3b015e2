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

use crate::id::{IdAdapter, Identifier};
use crate::repo::common::{Identifiable, Observer, Queryable};
use crate::store::EntityStore;
use crate::{Error, Result};

/// An observable repository of identifiable entities.
///
/// An `EntityRepo` wraps an [`EntityStore`] and runs the shared lifecycle around its
/// primitives: "before" observers, then an existence check where the operation calls for
/// one, then the backend primitive, then "after" observers. The lifecycle is the same
/// for every backend; stores only perform physical reads and writes.
///
/// Repositories are assembled with [`RepoOptions`], which registers observers and
/// optionally installs an [`IdAdapter`] for converting external identifier strings.
///
/// The existence check and the write that follows it are two separate store calls, not
/// one atomic operation. Two callers racing to create the same identifier can both pass
/// the check and both write, last write winning, unless the backend enforces its own
/// uniqueness constraint. [`create_unchecked`] and [`update_unchecked`] skip the check
/// for callers that don't need it.
///
/// All operations take `&self`, and a repository holds no mutable state of its own, so
/// one instance can serve concurrent callers.
///
/// [`RepoOptions`]: crate::repo::RepoOptions
/// [`IdAdapter`]: crate::id::IdAdapter
/// [`create_unchecked`]: EntityRepo::create_unchecked
/// [`update_unchecked`]: EntityRepo::update_unchecked
pub struct EntityRepo<T: Identifiable, S: EntityStore<T>> {
    store: S,
    observers: Vec<Box<dyn Observer<T>>>,
    adapter: Option<Box<dyn IdAdapter>>,
}

impl<T: Identifiable, S: EntityStore<T>> EntityRepo<T, S> {
    /// Create a new repository around `store` with no observers and no adapter.
    pub fn new(store: S) -> Self {
        Self {
            store,
            observers: Vec::new(),
            adapter: None,
        }
    }

    pub(crate) fn assemble(
        store: S,
        observers: Vec<Box<dyn Observer<T>>>,
        adapter: Option<Box<dyn IdAdapter>>,
    ) -> Self {
        Self {
            store,
            observers,
            adapter,
        }
    }

    /// Create `entity` in the store, returning the persisted entity.
    ///
    /// If the entity carries an identifier after the "before" observers have run, it
    /// must not already exist. The returned entity may differ from the submitted one:
    /// observers may have assigned identity or stamped times, and the backend may have
    /// assigned an identifier of its own.
    ///
    /// # Errors
    /// - `Error::AlreadyExists`: An entity with this identifier already exists.
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn create(&self, mut entity: T) -> Result<T> {
        self.notify_before_create(&mut entity)?;
        let id = entity.id();
        if !id.is_empty() && self.store.exists(&id)? {
            return Err(Error::AlreadyExists);
        }
        let mut created = self.store.create_entity(entity)?;
        self.notify_after_create(&mut created)?;
        Ok(created)
    }

    /// Create `entity` without checking whether its identifier already exists.
    ///
    /// Use this when the identifier is already known to be unique, such as a freshly
    /// generated UUID, to save the extra read. Whether creating an existing identifier
    /// overwrites or fails is then up to the backend.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn create_unchecked(&self, mut entity: T) -> Result<T> {
        self.notify_before_create(&mut entity)?;
        let mut created = self.store.create_entity(entity)?;
        self.notify_after_create(&mut created)?;
        Ok(created)
    }

    /// Read the entity with the given `id`.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn read(&self, id: &Identifier) -> Result<T> {
        self.notify_before_read(id)?;
        let mut entity = self.store.read_entity(id)?.ok_or(Error::NotFound)?;
        self.notify_after_read(&mut entity)?;
        Ok(entity)
    }

    /// Read the entities with the given `ids`, omitting identifiers with no entity.
    ///
    /// Missing identifiers are silently skipped rather than failing the whole batch, so
    /// the result may be shorter than the input.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn read_list<'a, I>(&self, ids: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        let mut entities = Vec::new();
        for id in ids {
            match self.read(id) {
                Ok(entity) => entities.push(entity),
                Err(Error::NotFound) => {}
                Err(error) => return Err(error),
            }
        }
        Ok(entities)
    }

    /// Update `entity` in the store, returning the persisted entity.
    ///
    /// The entity must already exist; there are no create-on-update semantics.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn update(&self, mut entity: T) -> Result<T> {
        self.notify_before_update(&mut entity)?;
        if !self.store.exists(&entity.id())? {
            return Err(Error::NotFound);
        }
        let mut updated = self.store.update_entity(entity)?;
        self.notify_after_update(&mut updated)?;
        Ok(updated)
    }

    /// Update `entity` without checking that it already exists.
    ///
    /// The write is issued unconditionally; whether an absent identifier is created or
    /// rejected is up to the backend.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn update_unchecked(&self, mut entity: T) -> Result<T> {
        self.notify_before_update(&mut entity)?;
        let mut updated = self.store.update_entity(entity)?;
        self.notify_after_update(&mut updated)?;
        Ok(updated)
    }

    /// Delete `entity` from the store.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// Observers may fail with further errors, aborting the operation.
    pub fn delete(&self, mut entity: T) -> Result<()> {
        self.notify_before_delete(&mut entity)?;
        self.store.delete_entity(&entity)?;
        self.notify_after_delete(&mut entity)?;
        Ok(())
    }

    /// Delete the entity with the given `id`.
    ///
    /// The entity is fetched from the store first, then deleted through the same
    /// pipeline as [`delete`]. Read observers are not notified of the fetch.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entity with this identifier.
    /// - `Error::Store`: An error occurred in the backing store.
    ///
    /// [`delete`]: EntityRepo::delete
    pub fn delete_by_id(&self, id: &Identifier) -> Result<()> {
        let entity = self.store.read_entity(id)?.ok_or(Error::NotFound)?;
        self.delete(entity)
    }

    /// Return whether an entity with the given `id` exists.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn exists(&self, id: &Identifier) -> Result<bool> {
        self.store.exists(id)
    }

    /// Parse an external identifier string with the installed adapter.
    ///
    /// Without an adapter, the string is wrapped as a single string component.
    ///
    /// # Errors
    /// - `Error::InvalidId`: The string was empty or not well-formed for the adapter.
    pub fn parse_id(&self, raw: &str) -> Result<Identifier> {
        match &self.adapter {
            Some(adapter) => adapter.parse(raw),
            None => {
                if raw.is_empty() {
                    return Err(Error::InvalidId);
                }
                Ok(Identifier::from(raw))
            }
        }
    }

    /// Format `id` as an external string with the installed adapter.
    ///
    /// Without an adapter, the identifier's own string form is used. Returns `None` if
    /// `id` is empty.
    pub fn format_id(&self, id: &Identifier) -> Option<String> {
        match &self.adapter {
            Some(adapter) => adapter.format(id),
            None => {
                if id.is_empty() {
                    None
                } else {
                    Some(id.to_string())
                }
            }
        }
    }

    /// The store backing this repository.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume this repository and return the store backing it.
    pub fn into_store(self) -> S {
        self.store
    }

    pub(crate) fn notify_before_create(&self, entity: &mut T) -> Result<()> {
        for observer in &self.observers {
            observer.before_create(entity)?;
        }
        Ok(())
    }

    pub(crate) fn notify_after_create(&self, entity: &mut T) -> Result<()> {
        for observer in &self.observers {
            observer.after_create(entity)?;
        }
        Ok(())
    }

    fn notify_before_read(&self, id: &Identifier) -> Result<()> {
        for observer in &self.observers {
            observer.before_read(id)?;
        }
        Ok(())
    }

    fn notify_after_read(&self, entity: &mut T) -> Result<()> {
        for observer in &self.observers {
            observer.after_read(entity)?;
        }
        Ok(())
    }

    pub(crate) fn notify_before_update(&self, entity: &mut T) -> Result<()> {
        for observer in &self.observers {
            observer.before_update(entity)?;
        }
        Ok(())
    }

    pub(crate) fn notify_after_update(&self, entity: &mut T) -> Result<()> {
        for observer in &self.observers {
            observer.after_update(entity)?;
        }
        Ok(())
    }

    fn notify_before_delete(&self, entity: &mut T) -> Result<()> {
        for observer in &self.observers {
            observer.before_delete(entity)?;
        }
        Ok(())
    }

    fn notify_after_delete(&self, entity: &mut T) -> Result<()> {
        for observer in &self.observers {
            observer.after_delete(entity)?;
        }
        Ok(())
    }
}

impl<T, S> EntityRepo<T, S>
where
    T: Identifiable,
    S: EntityStore<T> + Queryable<T>,
{
    /// Count the entities matching `filter`.
    ///
    /// This is available when the backing store supports querying.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn count(&self, filter: &S::Filter) -> Result<u64> {
        self.store.count(filter)
    }

    /// Read the entities matching `filter`, bounded by `range`, in `order`.
    ///
    /// This is available when the backing store supports querying.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    pub fn read_all(
        &self,
        filter: &S::Filter,
        range: &S::Range,
        order: &S::Order,
    ) -> Result<Vec<T>> {
        self.store.read_all(filter, range, order)
    }
}

impl<T: Identifiable, S: EntityStore<T>> Debug for EntityRepo<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRepo")
            .field("store", &self.store)
            .field("observers", &self.observers)
            .field("adapter", &self.adapter)
            .finish()
    }
}
