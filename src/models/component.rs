/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Component types and their typed configuration
//!
//! Every component type owns a concrete configuration struct. Incoming JSON is
//! parsed into the struct of the instance's own type, so a HeroSection can never
//! end up carrying a Footer's settings. Fields are optional: the preview
//! renderer fills in defaults for anything left out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hotel identifier as used by the static catalog
pub type HotelId = u32;

/// Most sponsor hotels a hero section can reference
pub const MAX_SPONSOR_HOTELS: usize = 2;

/// Most images a shuffle hero grid can hold
pub const MAX_SHUFFLE_IMAGES: usize = 16;

/// Whether `url` can sit inside a CSS `url('...')` without ending it early
///
/// Quotes, parentheses, backslashes and control characters are refused.
pub fn is_css_safe_url(url: &str) -> bool {
    !url
        .chars()
        .any(|c| matches!(c, '\'' | '"' | '(' | ')' | '\\') || c.is_control())
}

fn check_image_url(component: &str, url: &str) -> Result<(), String> {
    if is_css_safe_url(url) {
        Ok(())
    } else {
        Err(format!(
            "{} image URL '{}' contains characters not allowed in a URL",
            component, url
        ))
    }
}

/// Closed set of component types the page builder knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    HeroSection,
    ShuffleHero,
    HotelShowcase,
    LocationGrid,
    FeatureHighlights,
    Testimonials,
    FranchiseBanner,
    Footer,
}

impl ComponentType {
    /// All component types, in palette order
    pub const ALL: [ComponentType; 8] = [
        ComponentType::HeroSection,
        ComponentType::ShuffleHero,
        ComponentType::HotelShowcase,
        ComponentType::LocationGrid,
        ComponentType::FeatureHighlights,
        ComponentType::Testimonials,
        ComponentType::FranchiseBanner,
        ComponentType::Footer,
    ];

    /// Wire tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::HeroSection => "HeroSection",
            ComponentType::ShuffleHero => "ShuffleHero",
            ComponentType::HotelShowcase => "HotelShowcase",
            ComponentType::LocationGrid => "LocationGrid",
            ComponentType::FeatureHighlights => "FeatureHighlights",
            ComponentType::Testimonials => "Testimonials",
            ComponentType::FranchiseBanner => "FranchiseBanner",
            ComponentType::Footer => "Footer",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Large hero banner at the top of a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HeroSectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    /// Hotels featured as sponsors, picked from the catalog
    pub sponsor_hotel_ids: Vec<HotelId>,
}

/// Hero with a shuffling image grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ShuffleHeroConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    pub images: Vec<String>,
}

/// Grid of hotel cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HotelShowcaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Explicit hotel selection; empty means "first `max_items` of the catalog"
    pub hotel_ids: Vec<HotelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

/// List of cities the brand operates in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LocationGridConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Row of amenity/feature cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FeatureHighlightsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Guest quotes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TestimonialsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub testimonials: Vec<Testimonial>,
}

/// Call to action for prospective franchise partners
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FranchiseBannerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub social_links: Vec<SocialLink>,
}

/// Configuration payload of a component instance, one variant per type
///
/// Serializes as the bare inner object; the type tag lives next to it on the
/// instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentConfig {
    HeroSection(HeroSectionConfig),
    ShuffleHero(ShuffleHeroConfig),
    HotelShowcase(HotelShowcaseConfig),
    LocationGrid(LocationGridConfig),
    FeatureHighlights(FeatureHighlightsConfig),
    Testimonials(TestimonialsConfig),
    FranchiseBanner(FranchiseBannerConfig),
    Footer(FooterConfig),
}

impl ComponentConfig {
    /// Type this configuration belongs to
    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentConfig::HeroSection(_) => ComponentType::HeroSection,
            ComponentConfig::ShuffleHero(_) => ComponentType::ShuffleHero,
            ComponentConfig::HotelShowcase(_) => ComponentType::HotelShowcase,
            ComponentConfig::LocationGrid(_) => ComponentType::LocationGrid,
            ComponentConfig::FeatureHighlights(_) => ComponentType::FeatureHighlights,
            ComponentConfig::Testimonials(_) => ComponentType::Testimonials,
            ComponentConfig::FranchiseBanner(_) => ComponentType::FranchiseBanner,
            ComponentConfig::Footer(_) => ComponentType::Footer,
        }
    }

    /// Parse a JSON payload as the configuration of `component_type`
    ///
    /// `null` is read as an empty object. The result is validated before it
    /// is returned.
    pub fn from_value(
        component_type: ComponentType,
        value: serde_json::Value,
    ) -> Result<Self, String> {
        let value = match value {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => other,
        };

        let config = match component_type {
            ComponentType::HeroSection => serde_json::from_value(value).map(Self::HeroSection),
            ComponentType::ShuffleHero => serde_json::from_value(value).map(Self::ShuffleHero),
            ComponentType::HotelShowcase => {
                serde_json::from_value(value).map(Self::HotelShowcase)
            }
            ComponentType::LocationGrid => serde_json::from_value(value).map(Self::LocationGrid),
            ComponentType::FeatureHighlights => {
                serde_json::from_value(value).map(Self::FeatureHighlights)
            }
            ComponentType::Testimonials => serde_json::from_value(value).map(Self::Testimonials),
            ComponentType::FranchiseBanner => {
                serde_json::from_value(value).map(Self::FranchiseBanner)
            }
            ComponentType::Footer => serde_json::from_value(value).map(Self::Footer),
        }
        .map_err(|e| format!("{} config: {}", component_type, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Check the per-type constraints serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ComponentConfig::HeroSection(c) => {
                if c.sponsor_hotel_ids.len() > MAX_SPONSOR_HOTELS {
                    return Err(format!(
                        "HeroSection accepts at most {} sponsor hotels, got {}",
                        MAX_SPONSOR_HOTELS,
                        c.sponsor_hotel_ids.len()
                    ));
                }
                if c.sponsor_hotel_ids.len() == 2 && c.sponsor_hotel_ids[0] == c.sponsor_hotel_ids[1]
                {
                    return Err("HeroSection sponsor hotels must be distinct".to_string());
                }
                if let Some(image) = &c.background_image {
                    check_image_url("HeroSection", image)?;
                }
            }
            ComponentConfig::ShuffleHero(c) => {
                if c.images.len() > MAX_SHUFFLE_IMAGES {
                    return Err(format!(
                        "ShuffleHero accepts at most {} images, got {}",
                        MAX_SHUFFLE_IMAGES,
                        c.images.len()
                    ));
                }
                for image in &c.images {
                    check_image_url("ShuffleHero", image)?;
                }
            }
            ComponentConfig::HotelShowcase(c) => {
                if c.max_items == Some(0) {
                    return Err("HotelShowcase maxItems must be at least 1".to_string());
                }
            }
            ComponentConfig::Testimonials(c) => {
                if let Some(t) = c
                    .testimonials
                    .iter()
                    .find(|t| matches!(t.rating, Some(r) if !(1..=5).contains(&r)))
                {
                    return Err(format!(
                        "Testimonial rating from '{}' must be between 1 and 5",
                        t.author
                    ));
                }
            }
            ComponentConfig::LocationGrid(_)
            | ComponentConfig::FeatureHighlights(_)
            | ComponentConfig::FranchiseBanner(_)
            | ComponentConfig::Footer(_) => {}
        }
        Ok(())
    }
}
