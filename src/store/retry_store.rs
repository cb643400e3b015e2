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

use log::warn;

use crate::id::Identifier;
use crate::store::entity_store::EntityStore;
use crate::{Error, Result};

/// The retry budgets for a [`RetryStore`].
///
/// Reads and writes have separate budgets because retrying a write may not be safe against
/// every backend. A budget of `0` disables retries for that kind of operation, which is
/// the default.
///
/// [`RetryStore`]: crate::store::RetryStore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryConfig {
    /// The number of times `exists` and `read_entity` are retried after a store error.
    pub read_retries: u32,

    /// The number of times `create_entity`, `update_entity`, and `delete_entity` are
    /// retried after a store error.
    pub write_retries: u32,
}

/// An `EntityStore` which retries failed operations against a wrapped store.
///
/// Only [`Error::Store`] errors are retried; domain errors like [`Error::NotFound`] are
/// returned immediately. Retries happen with no delay between attempts, and each failed
/// attempt is logged. Once the budget for an operation is exhausted, the last error is
/// returned.
///
/// [`Error::Store`]: crate::Error::Store
/// [`Error::NotFound`]: crate::Error::NotFound
#[derive(Debug)]
pub struct RetryStore<S> {
    store: S,
    config: RetryConfig,
}

impl<S> RetryStore<S> {
    /// Create a new `RetryStore` wrapping `store` with the given `config`.
    pub fn new(store: S, config: RetryConfig) -> Self {
        Self { store, config }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Consume this store and return the wrapped store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn retry<R>(
        &self,
        budget: u32,
        operation: &str,
        mut attempt: impl FnMut() -> Result<R>,
    ) -> Result<R> {
        let mut retries = 0;
        loop {
            match attempt() {
                Err(Error::Store(error)) if retries < budget => {
                    retries += 1;
                    warn!(
                        "{} failed: {}. Retrying ({}/{}).",
                        operation, error, retries, budget
                    );
                }
                result => return result,
            }
        }
    }
}

impl<T, S> EntityStore<T> for RetryStore<S>
where
    T: Clone,
    S: EntityStore<T>,
{
    fn exists(&self, id: &Identifier) -> Result<bool> {
        self.retry(self.config.read_retries, "exists", || self.store.exists(id))
    }

    fn create_entity(&self, entity: T) -> Result<T> {
        self.retry(self.config.write_retries, "create", || {
            self.store.create_entity(entity.clone())
        })
    }

    fn read_entity(&self, id: &Identifier) -> Result<Option<T>> {
        self.retry(self.config.read_retries, "read", || {
            self.store.read_entity(id)
        })
    }

    fn update_entity(&self, entity: T) -> Result<T> {
        self.retry(self.config.write_retries, "update", || {
            self.store.update_entity(entity.clone())
        })
    }

    fn delete_entity(&self, entity: &T) -> Result<()> {
        self.retry(self.config.write_retries, "delete", || {
            self.store.delete_entity(entity)
        })
    }
}
