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

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use anyhow::anyhow;

use entity_store::id::Identifier;
use entity_store::repo::{Identifiable, Observer, Queryable};
use entity_store::store::{EntityStore, MemoryStore};
use entity_store::{Error, Result};

use super::entities::Page;

/// An in-memory store which counts how many times each primitive is called.
#[derive(Debug)]
pub struct CountingStore<T> {
    store: MemoryStore<T>,
    pub exists_calls: AtomicU32,
    pub create_calls: AtomicU32,
    pub read_calls: AtomicU32,
    pub update_calls: AtomicU32,
    pub delete_calls: AtomicU32,
}

impl<T> CountingStore<T> {
    pub fn new() -> Self {
        CountingStore {
            store: MemoryStore::new(),
            exists_calls: AtomicU32::new(0),
            create_calls: AtomicU32::new(0),
            read_calls: AtomicU32::new(0),
            update_calls: AtomicU32::new(0),
            delete_calls: AtomicU32::new(0),
        }
    }
}

impl<T> EntityStore<T> for CountingStore<T>
where
    T: Identifiable + Clone + Debug + Send + Sync,
{
    fn exists(&self, id: &Identifier) -> Result<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.store.exists(id)
    }

    fn create_entity(&self, entity: T) -> Result<T> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.store.create_entity(entity)
    }

    fn read_entity(&self, id: &Identifier) -> Result<Option<T>> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.store.read_entity(id)
    }

    fn update_entity(&self, entity: T) -> Result<T> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.store.update_entity(entity)
    }

    fn delete_entity(&self, entity: &T) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.store.delete_entity(entity)
    }
}

/// An in-memory store which fails the next N operations with a store error.
#[derive(Debug)]
pub struct FlakyStore<T> {
    store: MemoryStore<T>,
    failures: AtomicU32,
}

impl<T> FlakyStore<T> {
    pub fn new() -> Self {
        FlakyStore {
            store: MemoryStore::new(),
            failures: AtomicU32::new(0),
        }
    }

    /// Make the next `failures` operations fail.
    pub fn fail_next(&self, failures: u32) {
        self.failures.store(failures, Ordering::SeqCst);
    }

    fn try_fail(&self) -> Result<()> {
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(Error::Store(anyhow!("connection reset")));
        }
        Ok(())
    }
}

impl<T> EntityStore<T> for FlakyStore<T>
where
    T: Identifiable + Clone + Debug + Send + Sync,
{
    fn exists(&self, id: &Identifier) -> Result<bool> {
        self.try_fail()?;
        self.store.exists(id)
    }

    fn create_entity(&self, entity: T) -> Result<T> {
        self.try_fail()?;
        self.store.create_entity(entity)
    }

    fn read_entity(&self, id: &Identifier) -> Result<Option<T>> {
        self.try_fail()?;
        self.store.read_entity(id)
    }

    fn update_entity(&self, entity: T) -> Result<T> {
        self.try_fail()?;
        self.store.update_entity(entity)
    }

    fn delete_entity(&self, entity: &T) -> Result<()> {
        self.try_fail()?;
        self.store.delete_entity(entity)
    }
}

/// An observer which records the hooks it sees in a shared log.
#[derive(Debug)]
pub struct RecordingObserver {
    label: String,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingObserver {
    pub fn new(label: &str, log: Arc<Mutex<Vec<String>>>) -> Self {
        RecordingObserver {
            label: label.to_string(),
            log,
        }
    }

    fn record(&self, hook: &str) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{} {}", hook, self.label));
    }
}

impl<T> Observer<T> for RecordingObserver {
    fn before_create(&self, _entity: &mut T) -> Result<()> {
        self.record("before_create");
        Ok(())
    }

    fn after_create(&self, _entity: &mut T) -> Result<()> {
        self.record("after_create");
        Ok(())
    }

    fn before_read(&self, _id: &Identifier) -> Result<()> {
        self.record("before_read");
        Ok(())
    }

    fn after_read(&self, _entity: &mut T) -> Result<()> {
        self.record("after_read");
        Ok(())
    }

    fn before_update(&self, _entity: &mut T) -> Result<()> {
        self.record("before_update");
        Ok(())
    }

    fn after_update(&self, _entity: &mut T) -> Result<()> {
        self.record("after_update");
        Ok(())
    }

    fn before_delete(&self, _entity: &mut T) -> Result<()> {
        self.record("before_delete");
        Ok(())
    }

    fn after_delete(&self, _entity: &mut T) -> Result<()> {
        self.record("after_delete");
        Ok(())
    }
}

/// The order in which pages are returned from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrder {
    SlugAscending,
    SlugDescending,
}

/// A store of pages which supports querying by body text.
#[derive(Debug)]
pub struct QueryStore {
    pages: RwLock<HashMap<Identifier, Page>>,
}

impl QueryStore {
    pub fn new() -> Self {
        QueryStore {
            pages: RwLock::new(HashMap::new()),
        }
    }
}

impl EntityStore<Page> for QueryStore {
    fn exists(&self, id: &Identifier) -> Result<bool> {
        Ok(self.pages.read().unwrap().contains_key(id))
    }

    fn create_entity(&self, entity: Page) -> Result<Page> {
        self.pages
            .write()
            .unwrap()
            .insert(entity.id(), entity.clone());
        Ok(entity)
    }

    fn read_entity(&self, id: &Identifier) -> Result<Option<Page>> {
        Ok(self.pages.read().unwrap().get(id).cloned())
    }

    fn update_entity(&self, entity: Page) -> Result<Page> {
        self.pages
            .write()
            .unwrap()
            .insert(entity.id(), entity.clone());
        Ok(entity)
    }

    fn delete_entity(&self, entity: &Page) -> Result<()> {
        match self.pages.write().unwrap().remove(&entity.id()) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound),
        }
    }
}

impl Queryable<Page> for QueryStore {
    type Filter = String;
    type Range = usize;
    type Order = PageOrder;

    fn count(&self, filter: &Self::Filter) -> Result<u64> {
        let pages = self.pages.read().unwrap();
        Ok(pages
            .values()
            .filter(|page| page.body.contains(filter.as_str()))
            .count() as u64)
    }

    fn read_all(
        &self,
        filter: &Self::Filter,
        range: &Self::Range,
        order: &Self::Order,
    ) -> Result<Vec<Page>> {
        let pages = self.pages.read().unwrap();
        let mut matches = pages
            .values()
            .filter(|page| page.body.contains(filter.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        match order {
            PageOrder::SlugAscending => matches.sort_by(|a, b| a.slug.cmp(&b.slug)),
            PageOrder::SlugDescending => matches.sort_by(|a, b| b.slug.cmp(&a.slug)),
        }
        matches.truncate(*range);
        Ok(matches)
    }
}
