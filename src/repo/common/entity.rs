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

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::Identifier;

/// An entity which carries its own identifier.
///
/// This is the one capability every repository requires of its entities. An entity whose
/// identity has not been assigned yet returns an empty identifier.
pub trait Identifiable {
    /// The identifier of this entity, empty if identity has not been assigned yet.
    fn id(&self) -> Identifier;
}

/// An entity which records when it was created and last updated.
///
/// Implement this to let a [`TimestampObserver`] stamp the entity during create and
/// update.
///
/// [`TimestampObserver`]: crate::repo::TimestampObserver
pub trait Timestamped: Identifiable {
    /// The time this entity was created, if set.
    fn created_at(&self) -> Option<SystemTime>;

    /// The time this entity was last updated, if set.
    fn updated_at(&self) -> Option<SystemTime>;

    /// Set the time this entity was created.
    fn set_created_at(&mut self, time: SystemTime);

    /// Set the time this entity was last updated.
    fn set_updated_at(&mut self, time: SystemTime);
}

/// An entity identified by a UUID.
///
/// Implement this to let a [`UuidIdentityObserver`] assign identity on create.
///
/// [`UuidIdentityObserver`]: crate::repo::UuidIdentityObserver
pub trait UuidIdentifiable: Identifiable {
    /// The UUID of this entity, if one has been assigned.
    fn uuid(&self) -> Option<Uuid>;

    /// Assign the UUID of this entity.
    fn set_uuid(&mut self, uuid: Uuid);
}

/// How long an entity lives in an expiring store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ttl {
    /// The entity never expires.
    Never,

    /// The entity expires this many seconds after it is written.
    ///
    /// Zero seconds means the entity expires immediately and is never worth writing.
    Seconds(u64),
}

impl Ttl {
    /// Return whether a write is pointless because the entity expires immediately.
    pub fn expires_immediately(self) -> bool {
        self == Ttl::Seconds(0)
    }

    /// The lifetime as a duration, or `None` for [`Ttl::Never`].
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            Ttl::Never => None,
            Ttl::Seconds(seconds) => Some(Duration::from_secs(seconds)),
        }
    }
}

/// An entity with a time-to-live, for use with expiring stores.
pub trait Expiring: Identifiable {
    /// How long this entity should live once written.
    fn ttl(&self) -> Ttl;
}
