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

use std::fmt::Debug;

use static_assertions::assert_obj_safe;

use crate::id::Identifier;
use crate::Result;

/// A backend which persists entities of type `T`.
///
/// An `EntityStore` provides the CRUD primitives a repository is built on. Implementations
/// only persist and retrieve entities; existence checks before a write, observer
/// notifications, and identifier adaptation are the repository's job. A store primitive
/// should not second-guess the repository: `create_entity` may overwrite and
/// `update_entity` may insert, depending on what the backend does naturally.
///
/// Methods take `&self`, so implementations must handle their own synchronization.
///
/// Errors which originate in the backend should be returned as [`Error::Store`] so that
/// the repository and wrappers like [`RetryStore`] can tell infrastructure failures apart
/// from domain errors.
///
/// [`Error::Store`]: crate::Error::Store
/// [`RetryStore`]: crate::store::RetryStore
pub trait EntityStore<T>: Debug + Send + Sync {
    /// Return whether an entity with the given `id` exists.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backend.
    fn exists(&self, id: &Identifier) -> Result<bool>;

    /// Persist `entity` as a new record, returning the persisted entity.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backend.
    fn create_entity(&self, entity: T) -> Result<T>;

    /// Retrieve the entity with the given `id`, or `None` if there is none.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backend.
    fn read_entity(&self, id: &Identifier) -> Result<Option<T>>;

    /// Persist `entity` over an existing record, returning the persisted entity.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backend.
    fn update_entity(&self, entity: T) -> Result<T>;

    /// Remove the record for `entity`.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no record for this entity.
    /// - `Error::Store`: An error occurred in the backend.
    fn delete_entity(&self, entity: &T) -> Result<()>;
}

assert_obj_safe!(EntityStore<()>);

impl<T> EntityStore<T> for Box<dyn EntityStore<T>> {
    fn exists(&self, id: &Identifier) -> Result<bool> {
        (**self).exists(id)
    }

    fn create_entity(&self, entity: T) -> Result<T> {
        (**self).create_entity(entity)
    }

    fn read_entity(&self, id: &Identifier) -> Result<Option<T>> {
        (**self).read_entity(id)
    }

    fn update_entity(&self, entity: T) -> Result<T> {
        (**self).update_entity(entity)
    }

    fn delete_entity(&self, entity: &T) -> Result<()> {
        (**self).delete_entity(entity)
    }
}
