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
use std::mem;

use crate::id::IdAdapter;
use crate::repo::entity::EntityRepo;
use crate::store::EntityStore;

use super::entity::Identifiable;
use super::observer::Observer;

/// Configure and build a repository.
///
/// This type is a builder used to assemble repositories. Typically, when using
/// `RepoOptions`, you'll first call [`new`], then chain method calls to register
/// observers and install an identifier adapter, and then finally call [`build`] with the
/// store the repository should wrap.
///
/// A repository built without observers or an adapter performs the bare lifecycle:
/// existence checks and backend primitives only.
///
/// # Examples
/// ```
/// use entity_store::repo::entity::EntityRepo;
/// use entity_store::repo::{RepoOptions, TimestampObserver, UuidIdentityObserver};
/// use entity_store::id::UuidAdapter;
/// use entity_store::store::MemoryStore;
/// # use entity_store::id::Identifier;
/// # use entity_store::repo::{Identifiable, Timestamped, UuidIdentifiable};
/// # use entity_store::uuid::Uuid;
/// # use std::time::SystemTime;
/// # #[derive(Debug, Clone)]
/// # struct Note {
/// #     uuid: Option<Uuid>,
/// #     created_at: Option<SystemTime>,
/// #     updated_at: Option<SystemTime>,
/// # }
/// # impl Identifiable for Note {
/// #     fn id(&self) -> Identifier { self.uuid.map(Identifier::from).unwrap_or_default() }
/// # }
/// # impl UuidIdentifiable for Note {
/// #     fn uuid(&self) -> Option<Uuid> { self.uuid }
/// #     fn set_uuid(&mut self, uuid: Uuid) { self.uuid = Some(uuid); }
/// # }
/// # impl Timestamped for Note {
/// #     fn created_at(&self) -> Option<SystemTime> { self.created_at }
/// #     fn updated_at(&self) -> Option<SystemTime> { self.updated_at }
/// #     fn set_created_at(&mut self, time: SystemTime) { self.created_at = Some(time); }
/// #     fn set_updated_at(&mut self, time: SystemTime) { self.updated_at = Some(time); }
/// # }
///
/// let repo: EntityRepo<Note, MemoryStore<Note>> = RepoOptions::new()
///     .observe(UuidIdentityObserver::new())
///     .observe(TimestampObserver::new())
///     .id_adapter(UuidAdapter::short_form())
///     .build(MemoryStore::new());
/// ```
///
/// [`new`]: RepoOptions::new
/// [`build`]: RepoOptions::build
pub struct RepoOptions<T> {
    observers: Vec<Box<dyn Observer<T>>>,
    adapter: Option<Box<dyn IdAdapter>>,
}

impl<T> Default for RepoOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RepoOptions<T> {
    /// Create a new `RepoOptions` with no observers and no adapter.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            adapter: None,
        }
    }

    /// Register `observer` to be notified of lifecycle operations.
    ///
    /// Observers are invoked in registration order.
    pub fn observe(&mut self, observer: impl Observer<T> + 'static) -> &mut Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Install `adapter` for converting external identifier strings.
    ///
    /// A repository holds at most one adapter; installing a second replaces the first.
    /// If no adapter is installed, the repository parses raw strings as single string
    /// components and formats identifiers with their own string form.
    pub fn id_adapter(&mut self, adapter: impl IdAdapter + 'static) -> &mut Self {
        self.adapter = Some(Box::new(adapter));
        self
    }

    /// Build a repository around `store` with the configured observers and adapter.
    pub fn build<S>(&mut self, store: S) -> EntityRepo<T, S>
    where
        T: Identifiable,
        S: EntityStore<T>,
    {
        EntityRepo::assemble(store, mem::take(&mut self.observers), self.adapter.take())
    }
}

impl<T> Debug for RepoOptions<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepoOptions")
            .field("observers", &self.observers)
            .field("adapter", &self.adapter)
            .finish()
    }
}
