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

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single component value in an [`Identifier`].
///
/// Components are opaque scalar key values. Two components of the same kind compare by
/// the kind's natural ordering; components of different kinds compare by their string
/// forms.
///
/// The derived equality on this type is strict: components of different kinds are never
/// equal, even when their string forms match. Strict equality governs deduplication when
/// building an [`Identifier`]; [`Identifier`] equality itself is defined by comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdComponent {
    /// An arbitrary string key.
    String(String),
    /// A 32-bit integer key.
    Int(i32),
    /// A 64-bit integer key.
    Long(i64),
    /// A UUID key.
    Uuid(Uuid),
    /// An opaque byte array key, treated as UTF-8 text externally.
    Bytes(Vec<u8>),
}

impl IdComponent {
    /// Compare two components, using the natural ordering when both are the same kind and
    /// their string forms otherwise.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::String(this), Self::String(other)) => this.cmp(other),
            (Self::Int(this), Self::Int(other)) => this.cmp(other),
            (Self::Long(this), Self::Long(other)) => this.cmp(other),
            (Self::Uuid(this), Self::Uuid(other)) => this.cmp(other),
            (Self::Bytes(this), Self::Bytes(other)) => this.cmp(other),
            (this, other) => this.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for IdComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Long(value) => write!(f, "{}", value),
            Self::Uuid(value) => write!(f, "{}", value),
            Self::Bytes(value) => f.write_str(&String::from_utf8_lossy(value)),
        }
    }
}

impl From<&str> for IdComponent {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for IdComponent {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for IdComponent {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for IdComponent {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<Uuid> for IdComponent {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Vec<u8>> for IdComponent {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for IdComponent {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

/// The primary key of an entity, composed of one or more component values.
///
/// An `Identifier` is an ordered list of [`IdComponent`] values. Most identifiers have a
/// single component; compound keys have several. An identifier with no components is
/// "empty" and carries no identity. The first component is the primary key component,
/// used whenever a backend needs a single scalar key.
///
/// Appending a component that is already present (by strict component equality) is a
/// no-op, so an identifier never contains duplicates, and components keep their insertion
/// order.
///
/// Identifiers are totally ordered: shorter identifiers sort before longer ones, and
/// identifiers of equal arity compare their components pairwise in order (see
/// [`IdComponent::compare`]). Equality and hashing are consistent with this ordering, so
/// identifiers whose components differ only in kind but not in string form are equal.
///
/// The string form of an identifier is the empty string when empty, the sole component's
/// string form for a single component, and a parenthesized, comma-separated list
/// otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier {
    components: Vec<IdComponent>,
}

impl Identifier {
    /// Create a new empty identifier.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Append `component` unless an equal component is already present.
    ///
    /// A duplicate is dropped; it does not reorder the component already present.
    pub fn push(&mut self, component: impl Into<IdComponent>) {
        let component = component.into();
        if !self.components.contains(&component) {
            self.components.push(component);
        }
    }

    /// Append `component` unless an equal component is already present, returning the
    /// identifier for chaining.
    pub fn with(mut self, component: impl Into<IdComponent>) -> Self {
        self.push(component);
        self
    }

    /// The components of this identifier in insertion order.
    pub fn components(&self) -> &[IdComponent] {
        &self.components
    }

    /// The first component, or `None` if this identifier is empty.
    ///
    /// This is the canonical single-value key for non-compound identifiers.
    pub fn primary_key(&self) -> Option<&IdComponent> {
        self.components.first()
    }

    /// The number of components in this identifier.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Return whether this identifier has no components and so carries no identity.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components
            .len()
            .cmp(&other.components.len())
            .then_with(|| {
                self.components
                    .iter()
                    .zip(&other.components)
                    .map(|(this, other)| this.compare(other))
                    .find(|&ordering| ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the string forms so that identifiers which compare equal across component
        // kinds also hash equal.
        self.components.len().hash(state);
        for component in &self.components {
            component.to_string().hash(state);
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.components.as_slice() {
            [] => Ok(()),
            [sole] => write!(f, "{}", sole),
            components => {
                let joined = components
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "({})", joined)
            }
        }
    }
}

impl From<IdComponent> for Identifier {
    fn from(component: IdComponent) -> Self {
        Self {
            components: vec![component],
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::from(IdComponent::from(value))
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::from(IdComponent::from(value))
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::from(IdComponent::from(value))
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::from(IdComponent::from(value))
    }
}

impl From<Uuid> for Identifier {
    fn from(value: Uuid) -> Self {
        Self::from(IdComponent::from(value))
    }
}

impl From<Vec<u8>> for Identifier {
    fn from(value: Vec<u8>) -> Self {
        Self::from(IdComponent::from(value))
    }
}

impl From<&[u8]> for Identifier {
    fn from(value: &[u8]) -> Self {
        Self::from(IdComponent::from(value))
    }
}

impl FromIterator<IdComponent> for Identifier {
    fn from_iter<I: IntoIterator<Item = IdComponent>>(iter: I) -> Self {
        let mut identifier = Self::new();
        for component in iter {
            identifier.push(component);
        }
        identifier
    }
}
