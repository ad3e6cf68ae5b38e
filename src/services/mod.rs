/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Page builder services
//!
//! The page document store and its collaborators: component registry,
//! preview renderer, hotel catalog and mock admin auth.

mod auth;
mod catalog;
mod preview;
mod registry;
mod store;

pub use auth::MockAuth;
pub use catalog::HotelCatalog;
pub use preview::PreviewRenderer;
pub use registry::{ComponentDefinition, ComponentRegistry};
pub use store::PageStore;
