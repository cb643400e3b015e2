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

//! Low-level backends for entity storage.
//!
//! This module provides low-level storage backends called entity stores. An entity store
//! provides only the most basic CRUD operations, and doesn't have to worry about providing
//! features like existence checks, observer notifications, or identifier adaptation. Those
//! features are implemented at a higher level. Entity stores are meant to be easy to
//! implement so that providing support for new storage backends is relatively painless.
//!
//! All entity stores implement the [`EntityStore`] trait.
//!
//! Stores can be composed: [`RetryStore`] wraps any other store and retries failed
//! operations. [`MemoryStore`] and [`ExpiringMemoryStore`] keep entities in memory and are
//! useful for testing.
//!
//! [`EntityStore`]: crate::store::EntityStore
//! [`RetryStore`]: crate::store::RetryStore
//! [`MemoryStore`]: crate::store::MemoryStore
//! [`ExpiringMemoryStore`]: crate::store::ExpiringMemoryStore

pub use self::entity_store::EntityStore;
pub use self::memory_store::{ExpiringMemoryStore, MemoryStore};
pub use self::retry_store::{RetryConfig, RetryStore};

mod entity_store;
mod memory_store;
mod retry_store;
