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

//! `entity-store` is a library for backend-agnostic, observable entity storage.
//!
//! This crate provides high-level abstractions for entity storage over pluggable storage
//! backends. Storage backends are easy to implement, and this library builds on top of
//! them to provide the following features:
//! - Existence checks before creates and updates
//! - Observers which hook into the lifecycle of every operation
//! - Compound identifiers which can mix strings, integers, UUIDs, and bytes
//! - A compact URL-safe text form for UUID identifiers
//! - Time-to-live handling for entities which expire
//! - Configurable retries for flaky backends
//!
//! This library currently provides the following abstractions for entity storage:
//! - [`EntityRepo`] is a general-purpose repository of identifiable entities.
//! - [`ExpiringRepo`] is a repository of entities with a time-to-live.
//!
//! A repository stores its entities in an [`EntityStore`], which is a small trait that can
//! be implemented to create new storage backends. The following entity stores are provided
//! out of the box:
//! - [`MemoryStore`] stores entities in memory.
//! - [`ExpiringMemoryStore`] stores entities in memory and honors their time-to-live.
//! - [`RetryStore`] wraps another store and retries failed operations.
//!
//! # Examples
//! ```
//! use std::time::SystemTime;
//!
//! use entity_store::id::Identifier;
//! use entity_store::repo::entity::EntityRepo;
//! use entity_store::repo::{
//!     Identifiable, RepoOptions, TimestampObserver, Timestamped, UuidIdentifiable,
//!     UuidIdentityObserver,
//! };
//! use entity_store::store::MemoryStore;
//! use entity_store::uuid::Uuid;
//!
//! #[derive(Debug, Clone)]
//! struct Note {
//!     uuid: Option<Uuid>,
//!     body: String,
//!     created_at: Option<SystemTime>,
//!     updated_at: Option<SystemTime>,
//! }
//!
//! impl Identifiable for Note {
//!     fn id(&self) -> Identifier {
//!         self.uuid.map(Identifier::from).unwrap_or_default()
//!     }
//! }
//!
//! impl UuidIdentifiable for Note {
//!     fn uuid(&self) -> Option<Uuid> {
//!         self.uuid
//!     }
//!
//!     fn set_uuid(&mut self, uuid: Uuid) {
//!         self.uuid = Some(uuid);
//!     }
//! }
//!
//! impl Timestamped for Note {
//!     fn created_at(&self) -> Option<SystemTime> {
//!         self.created_at
//!     }
//!
//!     fn updated_at(&self) -> Option<SystemTime> {
//!         self.updated_at
//!     }
//!
//!     fn set_created_at(&mut self, time: SystemTime) {
//!         self.created_at = Some(time);
//!     }
//!
//!     fn set_updated_at(&mut self, time: SystemTime) {
//!         self.updated_at = Some(time);
//!     }
//! }
//!
//! fn main() -> entity_store::Result<()> {
//!     // Build a repository which assigns a UUID and timestamps to each new entity.
//!     let repo: EntityRepo<Note, MemoryStore<Note>> = RepoOptions::new()
//!         .observe(UuidIdentityObserver::new())
//!         .observe(TimestampObserver::new())
//!         .build(MemoryStore::new());
//!
//!     let note = repo.create(Note {
//!         uuid: None,
//!         body: String::from("Pick up milk"),
//!         created_at: None,
//!         updated_at: None,
//!     })?;
//!
//!     assert!(note.uuid.is_some());
//!     assert!(note.created_at.is_some());
//!
//!     // Read it back by its identifier.
//!     let found = repo.read(&note.id())?;
//!     assert_eq!(found.body, "Pick up milk");
//!
//!     Ok(())
//! }
//! ```
//!
//! [`EntityRepo`]: crate::repo::entity::EntityRepo
//! [`ExpiringRepo`]: crate::repo::expiring::ExpiringRepo
//! [`EntityStore`]: crate::store::EntityStore
//! [`MemoryStore`]: crate::store::MemoryStore
//! [`ExpiringMemoryStore`]: crate::store::ExpiringMemoryStore
//! [`RetryStore`]: crate::store::RetryStore

pub use uuid;

pub use error::{Error, Result};

mod error;
pub mod id;
pub mod repo;
pub mod store;
