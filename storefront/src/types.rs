//! Storefront data types.
//!
//! Everything the page displays is described here. The types are:
//!
//! - **Serializable** - the catalog ships as embedded JSON
//! - **Clone-friendly** - Leptos components take owned props
//! - **Default-able** - tests build partial fixtures with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use elegance_storefront::types::{Hotspot, Slide};
//!
//! let slide = Slide {
//!     id: 7,
//!     title: "Linen Weekend".into(),
//!     hotspots: vec![Hotspot {
//!         id: "shirt".into(),
//!         x: 40.0,
//!         y: 30.0,
//!         label: "Linen Shirt".into(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(slide.hotspots.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::palette::{Accent, Badge, Icon, Swatch};

/// Clickable product marker pinned to a slide image.
///
/// `x` and `y` are percentages of the image box measured from the left and
/// top edges. They are design-time constants and are not range-checked; a
/// value outside `0..=100` simply lands on or past the image edge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub label: String,
    /// Outbound product link, opened in a new tab
    pub link: String,
    /// Display price, already formatted ("€450")
    pub price: String,
}

/// One carousel entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    /// Image path relative to the site root
    pub image: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

/// Product card in the showcase grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: String,
    /// Pre-sale price, shown struck through when present
    #[serde(default)]
    pub original_price: Option<String>,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default)]
    pub colors: Vec<Swatch>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub badge: Option<Badge>,
}

impl Product {
    /// Rating with one decimal, as printed next to the star.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn reviews_label(&self) -> String {
        format!("({})", self.reviews)
    }
}

/// Headline number with a caption ("4.9" / "Rating").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Brand value card in the about section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCard {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub accent: Accent,
}

/// Plain text link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Titled column of footer links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<Link>,
}

/// Social network link, rendered icon-only with an aria label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

/// Way to reach the studio (phone, email, address).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub detail: String,
    pub icon: Icon,
    pub accent: Accent,
}

/// One row of the office hours table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHours {
    pub days: String,
    pub hours: String,
}

/// In-page navigation target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    /// Fragment link ("#collection")
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_label_keeps_one_decimal() {
        let product = Product {
            rating: 5.0,
            reviews: 12,
            ..Default::default()
        };
        assert_eq!(product.rating_label(), "5.0");
        assert_eq!(product.reviews_label(), "(12)");
    }

    #[test]
    fn slide_without_hotspots_field_deserializes() {
        let slide: Slide = serde_json::from_str(
            r#"{"id": 9, "image": "a.jpg", "title": "T", "description": "D"}"#,
        )
        .unwrap();
        assert!(slide.hotspots.is_empty());
    }

    #[test]
    fn hotspot_accepts_out_of_range_coordinates() {
        let hotspot: Hotspot = serde_json::from_str(
            r##"{"id": "h", "x": 120, "y": -5, "label": "L", "link": "#", "price": "€1"}"##,
        )
        .unwrap();
        assert_eq!(hotspot.x, 120.0);
        assert_eq!(hotspot.y, -5.0);
    }
}
