/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Preview renderer
//!
//! Turns the visible components of a page into HTML, one `<section>` per
//! component. Pure: the same page and catalog always give the same markup.

use maud::{html, Markup, DOCTYPE};

use crate::models::{
    is_css_safe_url, ComponentConfig, ComponentInstance, FeatureHighlightsConfig, FooterConfig,
    FranchiseBannerConfig, HeroSectionConfig, Hotel, HotelShowcaseConfig, LocationGridConfig,
    Page, ShuffleHeroConfig, TestimonialsConfig,
};
use crate::services::HotelCatalog;

const DEFAULT_HERO_HEADLINE: &str = "Welcome";
const DEFAULT_HERO_IMAGE: &str = "/images/hero-default.jpg";
const DEFAULT_CTA_LABEL: &str = "Learn more";
const DEFAULT_CTA_LINK: &str = "/";
const DEFAULT_SHOWCASE_TITLE: &str = "Our hotels";
const DEFAULT_SHOWCASE_ITEMS: u32 = 3;
const DEFAULT_LOCATIONS_TITLE: &str = "Locations";
const DEFAULT_FEATURES_TITLE: &str = "Highlights";
const DEFAULT_TESTIMONIALS_TITLE: &str = "Guest reviews";
const DEFAULT_FRANCHISE_HEADLINE: &str = "Become a partner";
const DEFAULT_COMPANY_NAME: &str = "Hotel Group";

/// Renders component lists against a hotel catalog
pub struct PreviewRenderer<'a> {
    catalog: &'a HotelCatalog,
}

impl<'a> PreviewRenderer<'a> {
    pub fn new(catalog: &'a HotelCatalog) -> Self {
        PreviewRenderer { catalog }
    }

    /// Full HTML document for the visible components of `page`
    pub fn render_page(&self, page: &Page) -> Markup {
        let body = self.render_components(&page.visible_components());
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (page.name) }
                }
                body data-page-slug=(page.slug) {
                    main { (body) }
                }
            }
        }
    }

    /// Markup for a component sequence
    ///
    /// Hidden components are skipped and the rest are emitted in `order`,
    /// whatever order the slice is in.
    pub fn render_components(&self, components: &[&ComponentInstance]) -> Markup {
        let mut visible: Vec<&ComponentInstance> =
            components.iter().copied().filter(|c| c.is_visible).collect();
        visible.sort_by_key(|c| c.order);

        html! {
            @for component in visible {
                (self.render_component(component))
            }
        }
    }

    fn render_component(&self, component: &ComponentInstance) -> Markup {
        let content = match &component.config {
            ComponentConfig::HeroSection(c) => self.hero_section(c),
            ComponentConfig::ShuffleHero(c) => shuffle_hero(c),
            ComponentConfig::HotelShowcase(c) => self.hotel_showcase(c),
            ComponentConfig::LocationGrid(c) => location_grid(c),
            ComponentConfig::FeatureHighlights(c) => feature_highlights(c),
            ComponentConfig::Testimonials(c) => testimonials(c),
            ComponentConfig::FranchiseBanner(c) => franchise_banner(c),
            ComponentConfig::Footer(c) => footer(c),
        };

        html! {
            section data-component-type=(component.component_type().as_str())
                data-component-id=(component.id) {
                (content)
            }
        }
    }

    fn hero_section(&self, config: &HeroSectionConfig) -> Markup {
        let sponsors: Vec<&Hotel> = config
            .sponsor_hotel_ids
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect();
        let image = config
            .background_image
            .as_deref()
            .filter(|url| is_css_safe_url(url))
            .unwrap_or(DEFAULT_HERO_IMAGE);

        html! {
            div.hero-section style={ "background-image: url('" (image) "')" } {
                h1 { (config.headline.as_deref().unwrap_or(DEFAULT_HERO_HEADLINE)) }
                @if let Some(sub) = &config.subheadline {
                    p.hero-subheadline { (sub) }
                }
                (cta(config.cta_label.as_deref(), config.cta_link.as_deref()))
                @if !sponsors.is_empty() {
                    ul.hero-sponsors {
                        @for hotel in sponsors {
                            li { (hotel_card(hotel)) }
                        }
                    }
                }
            }
        }
    }

    fn hotel_showcase(&self, config: &HotelShowcaseConfig) -> Markup {
        let max_items = config.max_items.unwrap_or(DEFAULT_SHOWCASE_ITEMS) as usize;
        let hotels: Vec<&Hotel> = if config.hotel_ids.is_empty() {
            self.catalog.all().iter().take(max_items).collect()
        } else {
            config
                .hotel_ids
                .iter()
                .filter_map(|id| self.catalog.get(*id))
                .take(max_items)
                .collect()
        };

        html! {
            div.hotel-showcase {
                h2 { (config.title.as_deref().unwrap_or(DEFAULT_SHOWCASE_TITLE)) }
                @if let Some(subtitle) = &config.subtitle {
                    p { (subtitle) }
                }
                div.hotel-grid {
                    @for hotel in hotels {
                        (hotel_card(hotel))
                    }
                }
            }
        }
    }
}

fn cta(label: Option<&str>, link: Option<&str>) -> Markup {
    html! {
        a.cta href=(link.unwrap_or(DEFAULT_CTA_LINK)) { (label.unwrap_or(DEFAULT_CTA_LABEL)) }
    }
}

fn hotel_card(hotel: &Hotel) -> Markup {
    html! {
        article.hotel-card data-hotel-id=(hotel.id) {
            img src=(hotel.image_url) alt=(hotel.name) loading="lazy";
            h3 { (hotel.name) }
            p.hotel-location { (hotel.city) ", " (hotel.country) }
            @if let Some(price) = hotel.price_from {
                p.hotel-price { "From " (price) " / night" }
            }
        }
    }
}

fn shuffle_hero(config: &ShuffleHeroConfig) -> Markup {
    html! {
        div.shuffle-hero {
            div.shuffle-copy {
                @if let Some(eyebrow) = &config.eyebrow {
                    span.eyebrow { (eyebrow) }
                }
                h2 { (config.headline.as_deref().unwrap_or(DEFAULT_HERO_HEADLINE)) }
                @if let Some(description) = &config.description {
                    p { (description) }
                }
                (cta(config.cta_label.as_deref(), config.cta_link.as_deref()))
            }
            div.shuffle-grid {
                @for image in config.images.iter().filter(|url| is_css_safe_url(url)) {
                    div.shuffle-tile style={ "background-image: url('" (image) "')" } {}
                }
            }
        }
    }
}

fn location_grid(config: &LocationGridConfig) -> Markup {
    html! {
        div.location-grid {
            h2 { (config.title.as_deref().unwrap_or(DEFAULT_LOCATIONS_TITLE)) }
            ul {
                @for location in &config.locations {
                    li { (location) }
                }
            }
        }
    }
}

fn feature_highlights(config: &FeatureHighlightsConfig) -> Markup {
    html! {
        div.feature-highlights {
            h2 { (config.title.as_deref().unwrap_or(DEFAULT_FEATURES_TITLE)) }
            @for feature in &config.features {
                div.feature data-icon=[feature.icon.as_deref()] {
                    h3 { (feature.title) }
                    p { (feature.description) }
                }
            }
        }
    }
}

fn testimonials(config: &TestimonialsConfig) -> Markup {
    html! {
        div.testimonials {
            h2 { (config.title.as_deref().unwrap_or(DEFAULT_TESTIMONIALS_TITLE)) }
            @for testimonial in &config.testimonials {
                blockquote {
                    p { (testimonial.quote) }
                    footer {
                        (testimonial.author)
                        @if let Some(rating) = testimonial.rating {
                            span.rating { " " (rating) "/5" }
                        }
                    }
                }
            }
        }
    }
}

fn franchise_banner(config: &FranchiseBannerConfig) -> Markup {
    html! {
        div.franchise-banner {
            h2 { (config.headline.as_deref().unwrap_or(DEFAULT_FRANCHISE_HEADLINE)) }
            @if let Some(body) = &config.body {
                p { (body) }
            }
            (cta(config.cta_label.as_deref(), config.cta_link.as_deref()))
        }
    }
}

fn footer(config: &FooterConfig) -> Markup {
    html! {
        footer.site-footer {
            strong { (config.company_name.as_deref().unwrap_or(DEFAULT_COMPANY_NAME)) }
            @if let Some(tagline) = &config.tagline {
                p { (tagline) }
            }
            @if let Some(email) = &config.contact_email {
                a href={ "mailto:" (email) } { (email) }
            }
            @if let Some(phone) = &config.phone {
                span.phone { (phone) }
            }
            @if !config.social_links.is_empty() {
                ul.social-links {
                    @for link in &config.social_links {
                        li { a href=(link.url) { (link.platform) } }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentConfig, HeroSectionConfig, HotelShowcaseConfig};

    fn page() -> Page {
        let mut page = Page::new("Home".into(), "home".into());
        page.append_component(ComponentConfig::HeroSection(HeroSectionConfig {
            headline: Some("Stay longer".into()),
            sponsor_hotel_ids: vec![2, 99],
            ..Default::default()
        }))
        .unwrap();
        page.append_component(ComponentConfig::Footer(FooterConfig::default()))
            .unwrap();
        page
    }

    #[test]
    fn hidden_components_are_not_rendered() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);
        let mut page = page();
        let hero_id = page.components[0].id.clone();
        page.components[0].is_visible = false;

        let html = renderer.render_page(&page).into_string();
        assert!(!html.contains(&hero_id));
        assert!(html.contains("data-component-type=\"Footer\""));
    }

    #[test]
    fn components_render_in_order() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);
        let mut page = page();
        page.components[0].order = 10;

        let html = renderer.render_page(&page).into_string();
        let footer = html.find("data-component-type=\"Footer\"").unwrap();
        let hero = html.find("data-component-type=\"HeroSection\"").unwrap();
        assert!(footer < hero);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);
        let page = page();

        let html = renderer.render_page(&page).into_string();
        assert!(html.contains(DEFAULT_COMPANY_NAME));
        assert!(html.contains(DEFAULT_HERO_IMAGE));
        assert!(html.contains(DEFAULT_CTA_LABEL));
    }

    #[test]
    fn sponsors_resolve_through_catalog_and_unknown_ids_are_skipped() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);

        let html = renderer.render_page(&page()).into_string();
        assert!(html.contains("Old Town Residences"));
        assert!(!html.contains("data-hotel-id=\"99\""));
    }

    #[test]
    fn showcase_without_selection_takes_first_hotels() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);
        let mut page = Page::new("Hotels".into(), "hotels".into());
        page.append_component(ComponentConfig::HotelShowcase(HotelShowcaseConfig {
            max_items: Some(2),
            ..Default::default()
        }))
        .unwrap();

        let html = renderer.render_page(&page).into_string();
        assert_eq!(html.matches("class=\"hotel-card\"").count(), 2);
    }

    #[test]
    fn text_is_escaped() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);
        let mut page = Page::new("Home".into(), "home".into());
        page.append_component(ComponentConfig::HeroSection(HeroSectionConfig {
            headline: Some("<script>alert(1)</script>".into()),
            ..Default::default()
        }))
        .unwrap();

        let html = renderer.render_page(&page).into_string();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn unsafe_image_urls_stay_out_of_styles() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);
        let injected = "x'); background:url('https://evil.example/track".to_string();
        let hero = ComponentInstance::new(
            ComponentConfig::HeroSection(HeroSectionConfig {
                background_image: Some(injected.clone()),
                ..Default::default()
            }),
            0,
        );
        let shuffle = ComponentInstance::new(
            ComponentConfig::ShuffleHero(ShuffleHeroConfig {
                images: vec![injected, "/images/rooms/1.jpg".into()],
                ..Default::default()
            }),
            1,
        );

        let html = renderer.render_components(&[&hero, &shuffle]).into_string();
        assert!(!html.contains("evil.example"));
        assert!(html.contains(DEFAULT_HERO_IMAGE));
        assert!(html.contains("/images/rooms/1.jpg"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = HotelCatalog::builtin();
        let renderer = PreviewRenderer::new(&catalog);
        let page = page();
        assert_eq!(
            renderer.render_page(&page).into_string(),
            renderer.render_page(&page).into_string()
        );
    }
}
