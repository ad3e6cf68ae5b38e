/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Hotel catalog models

use serde::{Deserialize, Serialize};

use crate::models::component::HotelId;

/// A hotel or serviced apartment building from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub city: String,
    pub country: String,

    /// Cover image URL
    pub image_url: String,

    /// Lowest nightly rate, in the brand's display currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// Entry of the sponsor-hotel picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOption {
    pub id: HotelId,
    pub label: String,
}

impl From<&Hotel> for HotelOption {
    fn from(hotel: &Hotel) -> Self {
        HotelOption {
            id: hotel.id,
            label: format!("{} ({})", hotel.name, hotel.city),
        }
    }
}
