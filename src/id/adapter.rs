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

use crate::{Error, Result};

use super::identifier::{IdComponent, Identifier};
use super::short_uuid;

/// A strategy for converting between external identifier strings and [`Identifier`]
/// values for a specific backend key type.
///
/// `parse` and `format` are inverses for well-formed input: parsing the formatted form of
/// an identifier yields an equal identifier. Implementations are stateless apart from
/// output-format preferences, so one instance can serve concurrent callers.
pub trait IdAdapter: Debug + Send + Sync {
    /// Parse an external identifier string into an [`Identifier`].
    ///
    /// # Errors
    /// - `Error::InvalidId`: The string was empty or not well-formed for this adapter's
    ///   key type.
    fn parse(&self, raw: &str) -> Result<Identifier>;

    /// Format the primary key component of `id` in its canonical external form.
    ///
    /// Returns `None` if `id` is empty. This never fails.
    fn format(&self, id: &Identifier) -> Option<String>;
}

assert_obj_safe!(IdAdapter);

/// An adapter for backends keyed by 32-bit integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntAdapter;

impl IntAdapter {
    /// Create a new `IntAdapter`.
    pub fn new() -> Self {
        Self
    }
}

impl IdAdapter for IntAdapter {
    fn parse(&self, raw: &str) -> Result<Identifier> {
        let value: i32 = raw.parse().map_err(|_| Error::InvalidId)?;
        Ok(Identifier::from(value))
    }

    fn format(&self, id: &Identifier) -> Option<String> {
        id.primary_key().map(ToString::to_string)
    }
}

/// An adapter for backends keyed by 64-bit integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongAdapter;

impl LongAdapter {
    /// Create a new `LongAdapter`.
    pub fn new() -> Self {
        Self
    }
}

impl IdAdapter for LongAdapter {
    fn parse(&self, raw: &str) -> Result<Identifier> {
        let value: i64 = raw.parse().map_err(|_| Error::InvalidId)?;
        Ok(Identifier::from(value))
    }

    fn format(&self, id: &Identifier) -> Option<String> {
        id.primary_key().map(ToString::to_string)
    }
}

/// An adapter for backends keyed by UUIDs.
///
/// Parsing accepts both the canonical 36-character hyphenated form and the 22-character
/// short form. Formatting emits the hyphenated form unless the adapter was created with
/// [`short_form`], in which case it emits the short form. The choice is held per adapter
/// instance, so repositories with different preferences do not interfere.
///
/// [`short_form`]: UuidAdapter::short_form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAdapter {
    short_form: bool,
}

impl UuidAdapter {
    /// Create an adapter which formats identifiers in the canonical hyphenated form.
    pub fn new() -> Self {
        Self { short_form: false }
    }

    /// Create an adapter which formats identifiers in the 22-character short form.
    pub fn short_form() -> Self {
        Self { short_form: true }
    }
}

impl IdAdapter for UuidAdapter {
    fn parse(&self, raw: &str) -> Result<Identifier> {
        short_uuid::decode(raw).map(Identifier::from)
    }

    fn format(&self, id: &Identifier) -> Option<String> {
        let key = id.primary_key()?;
        Some(match key {
            IdComponent::Uuid(uuid) if self.short_form => short_uuid::encode(uuid),
            other => other.to_string(),
        })
    }
}

/// An adapter for backends keyed by opaque byte arrays, treated as UTF-8 text externally.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesAdapter;

impl BytesAdapter {
    /// Create a new `BytesAdapter`.
    pub fn new() -> Self {
        Self
    }
}

impl IdAdapter for BytesAdapter {
    fn parse(&self, raw: &str) -> Result<Identifier> {
        if raw.is_empty() {
            return Err(Error::InvalidId);
        }
        Ok(Identifier::from(raw.as_bytes()))
    }

    fn format(&self, id: &Identifier) -> Option<String> {
        id.primary_key().map(ToString::to_string)
    }
}
