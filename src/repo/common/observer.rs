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
use std::time::SystemTime;

use static_assertions::assert_obj_safe;
use uuid::Uuid;

use crate::id::Identifier;
use crate::{Error, Result};

use super::entity::{Timestamped, UuidIdentifiable};

/// A hook into the repository lifecycle.
///
/// Observers are registered on a repository and invoked in registration order at fixed
/// points around each operation. "Before" hooks run before the existence check and the
/// backend write, so they can mutate the entity (assign identity, stamp times) or veto
/// the operation by returning an error; an error aborts the operation without running
/// later observers or the backend primitive. `before_read` receives the identifier being
/// read rather than an entity, since none exists yet.
///
/// Every hook is a no-op by default, so implementations override only the hooks they
/// care about.
pub trait Observer<T>: Debug + Send + Sync {
    /// Called before an entity is created.
    fn before_create(&self, _entity: &mut T) -> Result<()> {
        Ok(())
    }

    /// Called after an entity is created.
    fn after_create(&self, _entity: &mut T) -> Result<()> {
        Ok(())
    }

    /// Called before an entity is read.
    fn before_read(&self, _id: &Identifier) -> Result<()> {
        Ok(())
    }

    /// Called after an entity is read.
    fn after_read(&self, _entity: &mut T) -> Result<()> {
        Ok(())
    }

    /// Called before an entity is updated.
    fn before_update(&self, _entity: &mut T) -> Result<()> {
        Ok(())
    }

    /// Called after an entity is updated.
    fn after_update(&self, _entity: &mut T) -> Result<()> {
        Ok(())
    }

    /// Called before an entity is deleted.
    fn before_delete(&self, _entity: &mut T) -> Result<()> {
        Ok(())
    }

    /// Called after an entity is deleted.
    fn after_delete(&self, _entity: &mut T) -> Result<()> {
        Ok(())
    }
}

assert_obj_safe!(Observer<()>);

/// An observer which stamps creation and update times on entities.
///
/// On create, both the creation and update times are set to the current time. On update,
/// only the update time is refreshed. This observer never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampObserver;

impl TimestampObserver {
    /// Create a new `TimestampObserver`.
    pub fn new() -> Self {
        Self
    }
}

impl<T: Timestamped> Observer<T> for TimestampObserver {
    fn before_create(&self, entity: &mut T) -> Result<()> {
        let now = SystemTime::now();
        entity.set_created_at(now);
        entity.set_updated_at(now);
        Ok(())
    }

    fn before_update(&self, entity: &mut T) -> Result<()> {
        entity.set_updated_at(SystemTime::now());
        Ok(())
    }
}

/// An observer which assigns entity identity as a random UUID.
///
/// On create, a fresh UUID is assigned if the entity has none. On update, the entity
/// must already have a UUID; an entity with none fails with [`Error::InvalidId`], since
/// an entity must be identified before it can be updated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdentityObserver;

impl UuidIdentityObserver {
    /// Create a new `UuidIdentityObserver`.
    pub fn new() -> Self {
        Self
    }
}

impl<T: UuidIdentifiable> Observer<T> for UuidIdentityObserver {
    fn before_create(&self, entity: &mut T) -> Result<()> {
        if entity.uuid().is_none() {
            entity.set_uuid(Uuid::new_v4());
        }
        Ok(())
    }

    fn before_update(&self, entity: &mut T) -> Result<()> {
        if entity.uuid().is_none() {
            return Err(Error::InvalidId);
        }
        Ok(())
    }
}
