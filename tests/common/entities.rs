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

use std::time::SystemTime;

use entity_store::id::Identifier;
use entity_store::repo::{Expiring, Identifiable, Timestamped, Ttl, UuidIdentifiable};
use entity_store::uuid::Uuid;

/// A test entity with a UUID identity and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub uuid: Option<Uuid>,
    pub body: String,
    pub created_at: Option<SystemTime>,
    pub updated_at: Option<SystemTime>,
}

impl Note {
    pub fn new(body: &str) -> Self {
        Note {
            uuid: None,
            body: body.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_uuid(uuid: Uuid, body: &str) -> Self {
        Note {
            uuid: Some(uuid),
            ..Note::new(body)
        }
    }
}

impl Identifiable for Note {
    fn id(&self) -> Identifier {
        self.uuid.map(Identifier::from).unwrap_or_default()
    }
}

impl UuidIdentifiable for Note {
    fn uuid(&self) -> Option<Uuid> {
        self.uuid
    }

    fn set_uuid(&mut self, uuid: Uuid) {
        self.uuid = Some(uuid);
    }
}

impl Timestamped for Note {
    fn created_at(&self) -> Option<SystemTime> {
        self.created_at
    }

    fn updated_at(&self) -> Option<SystemTime> {
        self.updated_at
    }

    fn set_created_at(&mut self, time: SystemTime) {
        self.created_at = Some(time);
    }

    fn set_updated_at(&mut self, time: SystemTime) {
        self.updated_at = Some(time);
    }
}

/// A test entity identified by its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub slug: String,
    pub body: String,
}

impl Page {
    pub fn new(slug: &str, body: &str) -> Self {
        Page {
            slug: slug.to_string(),
            body: body.to_string(),
        }
    }
}

impl Identifiable for Page {
    fn id(&self) -> Identifier {
        Identifier::from(self.slug.as_str())
    }
}

/// A test entity with a time-to-live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub ttl: Ttl,
}

impl Session {
    pub fn new(token: &str, ttl: Ttl) -> Self {
        Session {
            token: token.to_string(),
            ttl,
        }
    }
}

impl Identifiable for Session {
    fn id(&self) -> Identifier {
        Identifier::from(self.token.as_str())
    }
}

impl Expiring for Session {
    fn ttl(&self) -> Ttl {
        self.ttl
    }
}
