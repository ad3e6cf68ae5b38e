/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Data models for the page builder
//!
//! Wire names are camelCase to match what the admin panel stores.

mod auth;
mod component;
mod hotel;
mod page;

pub use auth::*;
pub use component::*;
pub use hotel::*;
pub use page::*;
