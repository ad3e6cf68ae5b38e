/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Component type registry
//!
//! Read-only catalog of the component types offered in the page builder
//! palette. Each entry carries the display label, icon and the configuration a
//! new instance starts with.

use serde::Serialize;

use crate::error::{BuilderError, BuilderResult};
use crate::models::{
    ComponentConfig, ComponentType, FeatureHighlightsConfig, FeatureItem, FooterConfig,
    FranchiseBannerConfig, HeroSectionConfig, HotelShowcaseConfig, LocationGridConfig,
    ShuffleHeroConfig, SocialLink, Testimonial, TestimonialsConfig,
};

/// Palette entry for one component type
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub component_type: ComponentType,

    /// Human-readable name for the palette
    pub label: String,

    /// Icon name used by the admin UI
    pub icon: String,

    /// Configuration given to new instances
    pub default_config: ComponentConfig,
}

/// Registry of available component types
pub struct ComponentRegistry {
    definitions: Vec<ComponentDefinition>,
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ComponentRegistry {
            definitions: Vec::new(),
        }
    }

    /// Registry holding every built-in component type
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for component_type in ComponentType::ALL {
            registry.register(builtin_definition(component_type));
        }
        registry
    }

    /// Register a component type, replacing an earlier entry for the same type
    pub fn register(&mut self, definition: ComponentDefinition) {
        self.definitions
            .retain(|d| d.component_type != definition.component_type);
        self.definitions.push(definition);
    }

    /// All registered definitions, in registration order
    pub fn definitions(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    /// Look up a definition by its type tag
    ///
    /// Fails with `UnknownType` for tags outside the closed set and for
    /// types that were not registered.
    pub fn get(&self, type_tag: &str) -> BuilderResult<&ComponentDefinition> {
        type_tag
            .parse::<ComponentType>()
            .ok()
            .and_then(|t| self.get_type(t))
            .ok_or_else(|| BuilderError::UnknownType(type_tag.to_string()))
    }

    /// Look up a definition by type
    pub fn get_type(&self, component_type: ComponentType) -> Option<&ComponentDefinition> {
        self.definitions
            .iter()
            .find(|d| d.component_type == component_type)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_definition(component_type: ComponentType) -> ComponentDefinition {
    let (label, icon, default_config) = match component_type {
        ComponentType::HeroSection => (
            "Hero Section",
            "image",
            ComponentConfig::HeroSection(HeroSectionConfig {
                headline: Some("Your home away from home".into()),
                subheadline: Some("Serviced apartments and boutique hotels in the heart of the city".into()),
                background_image: Some("/images/hero-default.jpg".into()),
                cta_label: Some("Find your stay".into()),
                cta_link: Some("/hotels".into()),
                sponsor_hotel_ids: Vec::new(),
            }),
        ),
        ComponentType::ShuffleHero => (
            "Shuffle Hero",
            "shuffle",
            ComponentConfig::ShuffleHero(ShuffleHeroConfig {
                eyebrow: Some("Better every day".into()),
                headline: Some("Stays that feel like living there".into()),
                description: Some("Fully equipped apartments with hotel comforts, for a night or a season.".into()),
                cta_label: Some("Explore locations".into()),
                cta_link: Some("/locations".into()),
                images: Vec::new(),
            }),
        ),
        ComponentType::HotelShowcase => (
            "Hotel Showcase",
            "building",
            ComponentConfig::HotelShowcase(HotelShowcaseConfig {
                title: Some("Our hotels".into()),
                subtitle: Some("Hand-picked addresses across Europe".into()),
                hotel_ids: Vec::new(),
                max_items: Some(3),
            }),
        ),
        ComponentType::LocationGrid => (
            "Location Grid",
            "map-pin",
            ComponentConfig::LocationGrid(LocationGridConfig {
                title: Some("Where to find us".into()),
                locations: Vec::new(),
            }),
        ),
        ComponentType::FeatureHighlights => (
            "Feature Highlights",
            "star",
            ComponentConfig::FeatureHighlights(FeatureHighlightsConfig {
                title: Some("Why stay with us".into()),
                features: vec![
                    FeatureItem {
                        title: "Full kitchens".into(),
                        description: "Cook like at home in every apartment.".into(),
                        icon: Some("utensils".into()),
                    },
                    FeatureItem {
                        title: "24/7 support".into(),
                        description: "A real person answers, day or night.".into(),
                        icon: Some("headset".into()),
                    },
                ],
            }),
        ),
        ComponentType::Testimonials => (
            "Testimonials",
            "quote",
            ComponentConfig::Testimonials(TestimonialsConfig {
                title: Some("What our guests say".into()),
                testimonials: vec![Testimonial {
                    author: "A happy guest".into(),
                    quote: "Felt like my own flat, only tidier.".into(),
                    rating: Some(5),
                }],
            }),
        ),
        ComponentType::FranchiseBanner => (
            "Franchise Banner",
            "handshake",
            ComponentConfig::FranchiseBanner(FranchiseBannerConfig {
                headline: Some("Own a property? Partner with us".into()),
                body: Some("Join the network and let us run bookings, cleaning and guest care.".into()),
                cta_label: Some("Become a partner".into()),
                cta_link: Some("/franchise".into()),
            }),
        ),
        ComponentType::Footer => (
            "Footer",
            "layout-bottom",
            ComponentConfig::Footer(FooterConfig {
                company_name: Some("Hotel Group".into()),
                tagline: Some("Serviced apartments and hotels".into()),
                contact_email: Some("hello@example.com".into()),
                phone: None,
                social_links: vec![SocialLink {
                    platform: "instagram".into(),
                    url: "https://instagram.com/".into(),
                }],
            }),
        ),
    };

    ComponentDefinition {
        component_type,
        label: label.to_string(),
        icon: icon.to_string(),
        default_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_type_with_a_matching_default() {
        let registry = ComponentRegistry::builtin();
        assert_eq!(registry.definitions().len(), ComponentType::ALL.len());

        for definition in registry.definitions() {
            assert_eq!(
                definition.default_config.component_type(),
                definition.component_type
            );
            assert!(definition.default_config.validate().is_ok());
        }
    }

    #[test]
    fn lookup_by_tag() {
        let registry = ComponentRegistry::builtin();
        let hero = registry.get("HeroSection").unwrap();
        assert_eq!(hero.label, "Hero Section");
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let registry = ComponentRegistry::builtin();
        assert!(matches!(
            registry.get("Carousel"),
            Err(BuilderError::UnknownType(tag)) if tag == "Carousel"
        ));
    }

    #[test]
    fn unregistered_type_is_unknown() {
        let mut registry = ComponentRegistry::new();
        registry.register(builtin_definition(ComponentType::Footer));

        assert!(registry.get("Footer").is_ok());
        assert!(matches!(
            registry.get("HeroSection"),
            Err(BuilderError::UnknownType(_))
        ));
    }

    #[test]
    fn registering_twice_replaces() {
        let mut registry = ComponentRegistry::new();
        registry.register(builtin_definition(ComponentType::Footer));
        let mut custom = builtin_definition(ComponentType::Footer);
        custom.label = "Site footer".into();
        registry.register(custom);

        assert_eq!(registry.definitions().len(), 1);
        assert_eq!(registry.get("Footer").unwrap().label, "Site footer");
    }
}
