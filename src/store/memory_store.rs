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

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use std::time::Instant;

use crate::id::Identifier;
use crate::repo::{Expiring, Identifiable};
use crate::store::entity_store::EntityStore;
use crate::{Error, Result};

/// An `EntityStore` which stores entities in memory.
///
/// Unlike other `EntityStore` implementations, entities in a `MemoryStore` are not stored
/// persistently and are only accessible to the current process. This store is useful for
/// testing.
///
/// None of the methods in this store will ever return [`Error::Store`].
///
/// [`Error::Store`]: crate::Error::Store
#[derive(Debug)]
pub struct MemoryStore<T> {
    entities: RwLock<HashMap<Identifier, T>>,
}

impl<T> MemoryStore<T> {
    /// Create a new empty `MemoryStore`.
    pub fn new() -> Self {
        MemoryStore {
            entities: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityStore<T> for MemoryStore<T>
where
    T: Identifiable + Clone + Debug + Send + Sync,
{
    fn exists(&self, id: &Identifier) -> Result<bool> {
        Ok(self.entities.read().unwrap().contains_key(id))
    }

    fn create_entity(&self, entity: T) -> Result<T> {
        self.entities
            .write()
            .unwrap()
            .insert(entity.id(), entity.clone());
        Ok(entity)
    }

    fn read_entity(&self, id: &Identifier) -> Result<Option<T>> {
        Ok(self.entities.read().unwrap().get(id).cloned())
    }

    fn update_entity(&self, entity: T) -> Result<T> {
        self.entities
            .write()
            .unwrap()
            .insert(entity.id(), entity.clone());
        Ok(entity)
    }

    fn delete_entity(&self, entity: &T) -> Result<()> {
        match self.entities.write().unwrap().remove(&entity.id()) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound),
        }
    }
}

/// An entity with its expiration deadline.
#[derive(Debug)]
struct Entry<T> {
    entity: T,
    deadline: Option<Instant>,
}

impl<T> Entry<T> {
    fn is_live(&self) -> bool {
        self.deadline.map_or(true, |deadline| Instant::now() < deadline)
    }
}

/// An `EntityStore` which stores entities in memory and honors their time-to-live.
///
/// This store works like [`MemoryStore`], except that entities become invisible once
/// their TTL elapses. Expired entries are dropped lazily when they are next looked up
/// or overwritten; there is no background sweeper.
///
/// None of the methods in this store will ever return [`Error::Store`].
///
/// [`MemoryStore`]: crate::store::MemoryStore
/// [`Error::Store`]: crate::Error::Store
#[derive(Debug)]
pub struct ExpiringMemoryStore<T> {
    entities: RwLock<HashMap<Identifier, Entry<T>>>,
}

impl<T> ExpiringMemoryStore<T> {
    /// Create a new empty `ExpiringMemoryStore`.
    pub fn new() -> Self {
        ExpiringMemoryStore {
            entities: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for ExpiringMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityStore<T> for ExpiringMemoryStore<T>
where
    T: Expiring + Clone + Debug + Send + Sync,
{
    fn exists(&self, id: &Identifier) -> Result<bool> {
        Ok(self
            .entities
            .read()
            .unwrap()
            .get(id)
            .map_or(false, Entry::is_live))
    }

    fn create_entity(&self, entity: T) -> Result<T> {
        let deadline = entity.ttl().as_duration().map(|ttl| Instant::now() + ttl);
        self.entities.write().unwrap().insert(
            entity.id(),
            Entry {
                entity: entity.clone(),
                deadline,
            },
        );
        Ok(entity)
    }

    fn read_entity(&self, id: &Identifier) -> Result<Option<T>> {
        Ok(self
            .entities
            .read()
            .unwrap()
            .get(id)
            .filter(|entry| entry.is_live())
            .map(|entry| entry.entity.clone()))
    }

    fn update_entity(&self, entity: T) -> Result<T> {
        let deadline = entity.ttl().as_duration().map(|ttl| Instant::now() + ttl);
        self.entities.write().unwrap().insert(
            entity.id(),
            Entry {
                entity: entity.clone(),
                deadline,
            },
        );
        Ok(entity)
    }

    fn delete_entity(&self, entity: &T) -> Result<()> {
        match self.entities.write().unwrap().remove(&entity.id()) {
            Some(entry) if entry.is_live() => Ok(()),
            _ => Err(Error::NotFound),
        }
    }
}
