/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Page document model
//!
//! A page owns an ordered list of component instances. `order` values only
//! mean something relative to siblings; they are not kept contiguous.

use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{BuilderError, BuilderResult};
use crate::models::component::{ComponentConfig, ComponentType};

/// Unique identifier for a page
pub type PageId = String;

/// Unique identifier for a component instance within a page
pub type ComponentId = String;

/// Direction for `move_component`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards lower `order` values
    Up,
    /// Towards higher `order` values
    Down,
}

/// One configured, orderable unit placed on a page
///
/// The instance type is taken from its configuration variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "StoredComponent")]
pub struct ComponentInstance {
    pub id: ComponentId,
    pub order: i64,
    pub is_visible: bool,
    pub config: ComponentConfig,
}

impl ComponentInstance {
    /// Create a visible instance with a fresh id
    pub fn new(config: ComponentConfig, order: i64) -> Self {
        ComponentInstance {
            id: Uuid::new_v4().to_string(),
            order,
            is_visible: true,
            config,
        }
    }

    pub fn component_type(&self) -> ComponentType {
        self.config.component_type()
    }
}

/// Wire shape: `{id, type, order, isVisible, config}`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredComponent {
    id: ComponentId,
    #[serde(rename = "type")]
    component_type: ComponentType,
    order: i64,
    #[serde(default = "default_visible")]
    is_visible: bool,
    #[serde(default)]
    config: serde_json::Value,
}

fn default_visible() -> bool {
    true
}

impl TryFrom<StoredComponent> for ComponentInstance {
    type Error = String;

    fn try_from(stored: StoredComponent) -> Result<Self, Self::Error> {
        let config = ComponentConfig::from_value(stored.component_type, stored.config)?;
        Ok(ComponentInstance {
            id: stored.id,
            order: stored.order,
            is_visible: stored.is_visible,
            config,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentRef<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    component_type: ComponentType,
    order: i64,
    is_visible: bool,
    config: &'a ComponentConfig,
}

impl Serialize for ComponentInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComponentRef {
            id: &self.id,
            component_type: self.component_type(),
            order: self.order,
            is_visible: self.is_visible,
            config: &self.config,
        }
        .serialize(serializer)
    }
}

/// A named, sluggable ordered collection of component instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
}

impl Page {
    /// Create an empty page with a fresh id
    ///
    /// The slug is stored as given; callers normalize it first.
    pub fn new(name: String, slug: String) -> Self {
        Page {
            id: Uuid::new_v4().to_string(),
            name,
            slug,
            components: Vec::new(),
        }
    }

    /// Order value for an instance appended at the end
    ///
    /// Fails once the highest order is `i64::MAX`, since nothing can be
    /// placed after it.
    pub fn next_order(&self) -> BuilderResult<i64> {
        match self.components.iter().map(|c| c.order).max() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                BuilderError::InvalidInput(format!(
                    "Page '{}' has no order value left after {}",
                    self.id, max
                ))
            }),
        }
    }

    pub fn component(&self, component_id: &str) -> Option<&ComponentInstance> {
        self.components.iter().find(|c| c.id == component_id)
    }

    pub fn component_mut(&mut self, component_id: &str) -> Option<&mut ComponentInstance> {
        self.components.iter_mut().find(|c| c.id == component_id)
    }

    /// Append a new instance and return its id
    pub fn append_component(&mut self, config: ComponentConfig) -> BuilderResult<ComponentId> {
        let instance = ComponentInstance::new(config, self.next_order()?);
        let id = instance.id.clone();
        self.components.push(instance);
        Ok(id)
    }

    /// Swap `order` with the neighbouring sibling in `direction`
    ///
    /// Returns `None` if the component does not exist, `Some(false)` when it is
    /// already at that end or its neighbour shares its order value (swapping
    /// equal values moves nothing), `Some(true)` when two order values were
    /// exchanged.
    pub fn move_component(&mut self, component_id: &str, direction: Direction) -> Option<bool> {
        let sorted = self.sorted_indices();
        let position = sorted
            .iter()
            .position(|&i| self.components[i].id == component_id)?;

        let neighbour = match direction {
            Direction::Up if position > 0 => sorted[position - 1],
            Direction::Down if position + 1 < sorted.len() => sorted[position + 1],
            _ => return Some(false),
        };
        let current = sorted[position];
        if self.components[current].order == self.components[neighbour].order {
            return Some(false);
        }

        let current_order = self.components[current].order;
        self.components[current].order = self.components[neighbour].order;
        self.components[neighbour].order = current_order;
        Some(true)
    }

    /// Clone an instance with a fresh id, appended at the end
    pub fn duplicate_component(&mut self, component_id: &str) -> BuilderResult<ComponentId> {
        let order = self.next_order()?;
        let source = self.component(component_id).ok_or_else(|| {
            BuilderError::NotFound(format!(
                "Component '{}' on page '{}'",
                component_id, self.id
            ))
        })?;
        let mut copy = ComponentInstance::new(source.config.clone(), order);
        copy.is_visible = source.is_visible;
        let id = copy.id.clone();
        self.components.push(copy);
        Ok(id)
    }

    /// Remove an instance permanently
    pub fn remove_component(&mut self, component_id: &str) -> Option<ComponentInstance> {
        let index = self.components.iter().position(|c| c.id == component_id)?;
        Some(self.components.remove(index))
    }

    /// All instances, sorted by order
    pub fn sorted_components(&self) -> Vec<&ComponentInstance> {
        self.sorted_indices()
            .into_iter()
            .map(|i| &self.components[i])
            .collect()
    }

    /// Visible instances, sorted by order
    pub fn visible_components(&self) -> Vec<&ComponentInstance> {
        self.sorted_components()
            .into_iter()
            .filter(|c| c.is_visible)
            .collect()
    }

    // Stable sort keeps insertion order for equal order values
    fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.components.len()).collect();
        indices.sort_by_key(|&i| self.components[i].order);
        indices
    }
}

/// Normalize a slug: trim, lowercase, whitespace runs become `-`
pub fn normalize_slug(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::component::{FooterConfig, HeroSectionConfig, LocationGridConfig};
    use serde_json::json;

    fn page_with(count: usize) -> Page {
        let mut page = Page::new("Home".into(), "home".into());
        for _ in 0..count {
            page.append_component(ComponentConfig::Footer(FooterConfig::default()))
                .unwrap();
        }
        page
    }

    fn orders(page: &Page) -> Vec<i64> {
        page.components.iter().map(|c| c.order).collect()
    }

    #[test]
    fn slugs_are_lowercased_and_dashed() {
        assert_eq!(normalize_slug("  About Us "), "about-us");
        assert_eq!(normalize_slug("Our  Franchise\tOffer"), "our-franchise-offer");
        assert_eq!(normalize_slug("home"), "home");
    }

    #[test]
    fn first_component_gets_order_zero() {
        let mut page = page_with(0);
        page.append_component(ComponentConfig::HeroSection(HeroSectionConfig::default()))
            .unwrap();
        assert_eq!(orders(&page), vec![0]);
    }

    #[test]
    fn append_uses_max_plus_one_even_with_gaps() {
        let mut page = page_with(2);
        page.components[1].order = 10;
        page.append_component(ComponentConfig::Footer(FooterConfig::default()))
            .unwrap();
        assert_eq!(orders(&page), vec![0, 10, 11]);
    }

    #[test]
    fn nothing_can_follow_the_largest_order() {
        let mut page = page_with(2);
        page.components[0].order = i64::MAX;
        let source = page.components[1].id.clone();
        let before = page.clone();

        let err = page
            .append_component(ComponentConfig::Footer(FooterConfig::default()))
            .unwrap_err();
        assert!(matches!(err, BuilderError::InvalidInput(_)));
        assert!(matches!(
            page.duplicate_component(&source),
            Err(BuilderError::InvalidInput(_))
        ));
        assert_eq!(page, before);
    }

    #[test]
    fn moving_swaps_exactly_two_orders() {
        let mut page = page_with(3);
        let middle = page.components[1].id.clone();

        assert_eq!(page.move_component(&middle, Direction::Up), Some(true));
        assert_eq!(orders(&page), vec![1, 0, 2]);
        assert_eq!(page.sorted_components()[0].id, middle);
    }

    #[test]
    fn moving_past_either_end_is_a_no_op() {
        let mut page = page_with(3);
        let first = page.components[0].id.clone();
        let last = page.components[2].id.clone();
        let before = page.clone();

        assert_eq!(page.move_component(&first, Direction::Up), Some(false));
        assert_eq!(page.move_component(&last, Direction::Down), Some(false));
        assert_eq!(page, before);
    }

    #[test]
    fn moving_follows_order_not_vector_position() {
        let mut page = page_with(3);
        page.components[0].order = 5;
        let first_in_vec = page.components[0].id.clone();

        // order 5 is last, so moving down does nothing and up swaps with order 2
        assert_eq!(page.move_component(&first_in_vec, Direction::Down), Some(false));
        assert_eq!(page.move_component(&first_in_vec, Direction::Up), Some(true));
        assert_eq!(orders(&page), vec![2, 1, 5]);
    }

    #[test]
    fn moving_onto_an_equal_order_reports_no_move() {
        let mut page = page_with(2);
        page.components[1].order = 0;
        let second = page.components[1].id.clone();
        let before = page.clone();

        assert_eq!(page.move_component(&second, Direction::Up), Some(false));
        assert_eq!(page, before);
        assert_ne!(page.sorted_components()[0].id, second);
    }

    #[test]
    fn moving_unknown_component_is_none() {
        let mut page = page_with(1);
        assert_eq!(page.move_component("missing", Direction::Up), None);
        assert!(matches!(
            page.duplicate_component("missing"),
            Err(BuilderError::NotFound(_))
        ));
    }

    #[test]
    fn duplicate_gets_new_id_and_last_order() {
        let mut page = page_with(2);
        page.components[0].is_visible = false;
        let source = page.components[0].clone();

        let copy_id = page.duplicate_component(&source.id).unwrap();
        let copy = page.component(&copy_id).unwrap();

        assert_ne!(copy.id, source.id);
        assert_eq!(copy.config, source.config);
        assert_eq!(copy.order, 2);
        assert!(!copy.is_visible);
    }

    #[test]
    fn visible_components_skip_hidden_and_sort() {
        let mut page = page_with(3);
        page.components[0].order = 9;
        page.components[1].is_visible = false;

        let visible: Vec<i64> = page.visible_components().iter().map(|c| c.order).collect();
        assert_eq!(visible, vec![2, 9]);
        assert_eq!(page.components.len(), 3);
    }

    #[test]
    fn instance_wire_shape_carries_type_tag() {
        let mut page = page_with(0);
        page.append_component(ComponentConfig::LocationGrid(LocationGridConfig {
            title: Some("Where we are".into()),
            locations: vec!["Lisbon".into()],
        }))
        .unwrap();

        let value = serde_json::to_value(&page).unwrap();
        let component = &value["components"][0];
        assert_eq!(component["type"], "LocationGrid");
        assert_eq!(component["order"], 0);
        assert_eq!(component["isVisible"], true);
        assert_eq!(component["config"]["locations"], json!(["Lisbon"]));

        let back: Page = serde_json::from_value(value).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn stored_config_must_match_its_type() {
        let stored = json!({
            "id": "c1",
            "type": "Footer",
            "order": 0,
            "isVisible": true,
            "config": { "sponsorHotelIds": [1] }
        });
        assert!(serde_json::from_value::<ComponentInstance>(stored).is_err());
    }
}
