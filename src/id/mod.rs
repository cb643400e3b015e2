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

//! Identifiers, their external string forms, and adapters between the two.
//!
//! An [`Identifier`] is the primary key of an entity: an ordered, deduplicated list of
//! [`IdComponent`] values, usually just one. Identifiers have a total ordering and a
//! string form, so they can key ordered and hashed collections and appear in URLs and
//! logs.
//!
//! An [`IdAdapter`] converts between external identifier strings and `Identifier` values
//! for one backend key type. This module provides adapters for integer, long, UUID, and
//! byte array keys. The UUID adapter understands the 22-character short form implemented
//! in [`short_uuid`], a URL-safe base64 encoding of the UUID's raw bytes.

pub use self::adapter::{BytesAdapter, IdAdapter, IntAdapter, LongAdapter, UuidAdapter};
pub use self::identifier::{IdComponent, Identifier};

mod adapter;
mod identifier;
pub mod short_uuid;
