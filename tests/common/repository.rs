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

use rstest::*;

use entity_store::repo::entity::EntityRepo;
use entity_store::repo::expiring::ExpiringRepo;
use entity_store::repo::{RepoOptions, TimestampObserver, UuidIdentityObserver};
use entity_store::store::{ExpiringMemoryStore, MemoryStore};

use super::entities::{Note, Session};
use super::stores::CountingStore;

/// A repository of notes which assigns UUIDs and timestamps on create.
#[fixture]
pub fn memory_repo() -> EntityRepo<Note, MemoryStore<Note>> {
    RepoOptions::new()
        .observe(UuidIdentityObserver::new())
        .observe(TimestampObserver::new())
        .build(MemoryStore::new())
}

/// A repository of notes backed by a store which counts primitive calls.
#[fixture]
pub fn counting_repo() -> EntityRepo<Note, CountingStore<Note>> {
    RepoOptions::new()
        .observe(UuidIdentityObserver::new())
        .observe(TimestampObserver::new())
        .build(CountingStore::new())
}

/// A repository of sessions which honors their time-to-live.
#[fixture]
pub fn expiring_repo() -> ExpiringRepo<Session, ExpiringMemoryStore<Session>> {
    ExpiringRepo::new(EntityRepo::new(ExpiringMemoryStore::new()))
}
