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

use std::result;

use thiserror::Error as DeriveError;

/// The error type for operations with a repository.
///
/// The first three variants are domain errors: the request itself was wrong. The `Store`
/// variant carries errors from the backing data store, so callers can tell a semantically
/// invalid request apart from an unavailable store.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// The identifier was malformed, empty, or missing where one is required.
    #[error("The identifier was malformed, empty, or missing where one is required.")]
    InvalidId,

    /// An entity with this identifier already exists.
    #[error("An entity with this identifier already exists.")]
    AlreadyExists,

    /// An entity with this identifier was not found.
    #[error("An entity with this identifier was not found.")]
    NotFound,

    /// An error occurred in the backing data store.
    #[error(transparent)]
    Store(anyhow::Error),
}

/// The result type for operations with a repository.
pub type Result<T> = result::Result<T, Error>;
