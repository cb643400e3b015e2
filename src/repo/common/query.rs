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

use crate::Result;

/// An extension for stores which can query entities by criteria.
///
/// The criteria types are chosen by the implementation and are opaque to this crate; a
/// SQL-backed store might use a `WHERE`-clause builder while an in-memory store uses a
/// predicate. A repository whose store implements this trait forwards both operations.
pub trait Queryable<T> {
    /// The filter criteria this store understands.
    type Filter;

    /// The range criteria (offsets and limits) this store understands.
    type Range;

    /// The ordering criteria this store understands.
    type Order;

    /// Count the entities matching `filter`.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    fn count(&self, filter: &Self::Filter) -> Result<u64>;

    /// Read the entities matching `filter`, bounded by `range`, in `order`.
    ///
    /// # Errors
    /// - `Error::Store`: An error occurred in the backing store.
    fn read_all(
        &self,
        filter: &Self::Filter,
        range: &Self::Range,
        order: &Self::Order,
    ) -> Result<Vec<T>>;
}
