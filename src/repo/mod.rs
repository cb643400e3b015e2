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

//! High-level abstractions for entity storage.
//!
//! This module provides abstractions for entity storage called repositories. Each
//! repository is backed by an [`EntityStore`], and layers identifier handling, existence
//! checks, and observer notifications over the store's CRUD primitives.
//!
//! This module contains types which are common to all repositories. The most important of
//! these are [`Observer`], which hooks into the lifecycle of every operation, and
//! [`RepoOptions`], which is used to build a repository.
//!
//! Each sub-module of this module contains a different repository type. If you're not sure
//! which one you should use, [`EntityRepo`] has the most general use-case.
//!
//! # Observers
//! Every operation on a repository notifies a list of observers before and after it runs.
//! Observers can inspect and modify the entity, or abort the operation by returning an
//! error. The "before" observers run before the repository checks whether the entity
//! exists, so an observer which assigns an identifier (like [`UuidIdentityObserver`])
//! affects which entity the existence check looks for. Observers are notified in the order
//! they were registered.
//!
//! # Existence checks
//! [`EntityRepo::create`] returns an error if an entity with the same identifier already
//! exists, and [`EntityRepo::update`] returns an error if it doesn't. These checks are
//! separate operations against the backing store, so a concurrent writer can still slip in
//! between the check and the write. Stores which can enforce these constraints themselves
//! can be paired with [`EntityRepo::create_unchecked`] and [`EntityRepo::update_unchecked`]
//! to skip the extra round-trip.
//!
//! # Identifier adaptation
//! Identifiers cross API boundaries as strings. A repository can be configured with an
//! [`IdAdapter`] which parses inbound strings into identifiers and formats identifiers
//! back into strings. Without an adapter, [`EntityRepo::parse_id`] treats the raw string
//! as a single string component and [`EntityRepo::format_id`] uses the identifier's
//! display form.
//!
//! # Expiration
//! Entities which carry a time-to-live can be stored in an [`ExpiringRepo`], which skips
//! the backend write entirely when the entity would expire immediately. See [`Ttl`] for
//! details.
//!
//! [`EntityStore`]: crate::store::EntityStore
//! [`Observer`]: crate::repo::Observer
//! [`RepoOptions`]: crate::repo::RepoOptions
//! [`EntityRepo`]: crate::repo::entity::EntityRepo
//! [`EntityRepo::create`]: crate::repo::entity::EntityRepo::create
//! [`EntityRepo::update`]: crate::repo::entity::EntityRepo::update
//! [`EntityRepo::create_unchecked`]: crate::repo::entity::EntityRepo::create_unchecked
//! [`EntityRepo::update_unchecked`]: crate::repo::entity::EntityRepo::update_unchecked
//! [`EntityRepo::parse_id`]: crate::repo::entity::EntityRepo::parse_id
//! [`EntityRepo::format_id`]: crate::repo::entity::EntityRepo::format_id
//! [`UuidIdentityObserver`]: crate::repo::UuidIdentityObserver
//! [`IdAdapter`]: crate::id::IdAdapter
//! [`ExpiringRepo`]: crate::repo::expiring::ExpiringRepo
//! [`Ttl`]: crate::repo::Ttl

pub use self::common::{
    Expiring, Identifiable, Observer, Queryable, RepoOptions, TimestampObserver, Timestamped, Ttl,
    UuidIdentifiable, UuidIdentityObserver,
};

mod common;
pub mod entity;
pub mod expiring;
