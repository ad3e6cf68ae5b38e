/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Static hotel catalog
//!
//! Read-only list of hotels. It feeds the sponsor-hotel picker and lets the
//! preview renderer resolve hotel ids; nothing writes back to it.

use std::path::Path;
use tokio::fs;

use crate::error::{BuilderError, BuilderResult};
use crate::models::{Hotel, HotelId, HotelOption};

/// Read-only hotel catalog
#[derive(Debug, Clone)]
pub struct HotelCatalog {
    hotels: Vec<Hotel>,
}

impl HotelCatalog {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        HotelCatalog { hotels }
    }

    /// Catalog bundled with the server
    pub fn builtin() -> Self {
        let hotel = |id: HotelId,
                     name: &str,
                     city: &str,
                     country: &str,
                     price_from: u32,
                     rating: f32| Hotel {
            id,
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            image_url: format!("/images/hotels/{}.jpg", id),
            price_from: Some(price_from),
            rating: Some(rating),
        };

        HotelCatalog::new(vec![
            hotel(1, "Harbour View Suites", "Lisbon", "Portugal", 119, 4.7),
            hotel(2, "Old Town Residences", "Prague", "Czech Republic", 95, 4.5),
            hotel(3, "Canal House Apartments", "Amsterdam", "Netherlands", 149, 4.6),
            hotel(4, "Riverside Lofts", "Budapest", "Hungary", 89, 4.4),
            hotel(5, "Garden Court Aparthotel", "Vienna", "Austria", 129, 4.8),
            hotel(6, "Seafront Studios", "Barcelona", "Spain", 139, 4.3),
        ])
    }

    /// Load a catalog from a JSON array of hotels
    pub async fn from_file(path: &Path) -> BuilderResult<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BuilderError::NotFound(format!("Hotel catalog '{}' not found", path.display()))
            } else {
                BuilderError::Catalog(format!("{}: {}", path.display(), e))
            }
        })?;

        let hotels: Vec<Hotel> = serde_json::from_str(&content)
            .map_err(|e| BuilderError::Catalog(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Loaded {} hotel(s) from {}", hotels.len(), path.display());

        Ok(HotelCatalog::new(hotels))
    }

    pub fn all(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn get(&self, id: HotelId) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    /// Entries for the sponsor-hotel picker
    pub fn picker_options(&self) -> Vec<HotelOption> {
        self.hotels.iter().map(HotelOption::from).collect()
    }
}

impl Default for HotelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = HotelCatalog::builtin();
        let mut ids: Vec<_> = catalog.all().iter().map(|h| h.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn picker_labels_include_city() {
        let catalog = HotelCatalog::builtin();
        let options = catalog.picker_options();
        assert_eq!(options[0].id, 1);
        assert_eq!(options[0].label, "Harbour View Suites (Lisbon)");
    }

    #[tokio::test]
    async fn loads_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotels.json");
        std::fs::write(
            &path,
            r#"[{"id": 42, "name": "Test Inn", "city": "Porto", "country": "Portugal", "imageUrl": "/x.jpg"}]"#,
        )
        .unwrap();

        let catalog = HotelCatalog::from_file(&path).await.unwrap();
        assert_eq!(catalog.get(42).map(|h| h.name.as_str()), Some("Test Inn"));
        assert!(catalog.get(1).is_none());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = HotelCatalog::from_file(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, BuilderError::NotFound(_)));
    }

    #[tokio::test]
    async fn malformed_file_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotels.json");
        std::fs::write(&path, r#"[{"id": "not a number"}]"#).unwrap();

        let err = HotelCatalog::from_file(&path).await.unwrap_err();
        assert!(matches!(err, BuilderError::Catalog(_)));
        assert!(err.to_string().contains("hotels.json"));
    }
}
