//! The hard-coded storefront catalog.
//!
//! All display content (carousel looks, showcase products, brand values,
//! contact details, footer columns) ships as `data/catalog.json`, compiled
//! into the binary and parsed once at startup.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deck::SlideDeck;
use crate::error::Result;
use crate::types::{
    ContactChannel, FooterSection, Link, MenuItem, OfficeHours, Product, Slide, SocialLink, Stat,
    ValueCard,
};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub menu: Vec<MenuItem>,
    /// Carousel looks, in display order
    pub slides: Vec<Slide>,
    pub hero_stats: Vec<Stat>,
    pub products: Vec<Product>,
    pub values: Vec<ValueCard>,
    pub heritage_stats: Vec<Stat>,
    pub contact_channels: Vec<ContactChannel>,
    pub office_hours: Vec<OfficeHours>,
    pub social_links: Vec<SocialLink>,
    pub footer_sections: Vec<FooterSection>,
    pub legal_links: Vec<Link>,
}

impl Catalog {
    /// The catalog shipped with the site.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(source)?;
        debug!(
            slides = catalog.slides.len(),
            products = catalog.products.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Carousel deck over this catalog's slides.
    pub fn deck(&self) -> Result<SlideDeck> {
        SlideDeck::new(self.slides.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn catalog_without_slides_cannot_build_a_deck() {
        let catalog = Catalog::from_json(r#"{"products": []}"#).unwrap();
        assert!(matches!(catalog.deck(), Err(StorefrontError::EmptyDeck)));
    }

    #[test]
    fn unknown_colour_fails_to_parse() {
        let source = r#"{"products": [{
            "id": 1, "name": "N", "category": "C", "price": "€1", "image": "i.jpg",
            "rating": 4.0, "reviews": 1, "colors": ["Mauve"], "description": "D"
        }]}"#;
        assert!(matches!(
            Catalog::from_json(source),
            Err(StorefrontError::Catalog(_))
        ));
    }
}
