/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Durable storage for the page document
//!
//! `KeyValueStorage` is the string-keyed slot the admin panel writes to.
//! `PagePersistence` serializes the whole page list into one key of it.

mod fs_storage;
mod memory;
mod persistence;
mod traits;

pub use fs_storage::FsStorage;
pub use memory::MemoryStorage;
pub use persistence::{PagePersistence, DEFAULT_PAGES_KEY};
pub use traits::KeyValueStorage;
