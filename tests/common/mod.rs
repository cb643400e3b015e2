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

#![allow(dead_code)]

pub use assertions::*;
pub use entities::*;
pub use repository::*;
pub use stores::*;

// Re-exported so that test files can glob import `common` and get these macros in scope.
pub use rstest::rstest;
pub use spectral::prelude::*;

mod assertions;
mod entities;
mod repository;
mod stores;
