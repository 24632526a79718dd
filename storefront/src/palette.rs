//! Style token tables.
//!
//! Catalog entries name colours, badges, accents and icons by key. The page
//! never builds a class name from a data string: every key is an enum and
//! every enum maps to its token through an exhaustive `match`, so a new key
//! cannot silently fall through to a default style. Unknown keys in catalog
//! data fail to deserialize instead.

use serde::{Deserialize, Serialize};

/// Fabric colour offered for a product, rendered as a round swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Swatch {
    Cream,
    Camel,
    Navy,
    Ivory,
    Blush,
    Sage,
    Charcoal,
    Black,
}

impl Swatch {
    /// All swatches in palette order.
    pub const ALL: [Swatch; 8] = [
        Swatch::Cream,
        Swatch::Camel,
        Swatch::Navy,
        Swatch::Ivory,
        Swatch::Blush,
        Swatch::Sage,
        Swatch::Charcoal,
        Swatch::Black,
    ];

    /// CSS class painting the swatch dot.
    pub fn token(self) -> &'static str {
        match self {
            Swatch::Cream => "swatch-cream",
            Swatch::Camel => "swatch-camel",
            Swatch::Navy => "swatch-navy",
            Swatch::Ivory => "swatch-ivory",
            Swatch::Blush => "swatch-blush",
            Swatch::Sage => "swatch-sage",
            Swatch::Charcoal => "swatch-charcoal",
            Swatch::Black => "swatch-black",
        }
    }

    /// Human-readable colour name, used as the swatch tooltip.
    pub fn label(self) -> &'static str {
        match self {
            Swatch::Cream => "Cream",
            Swatch::Camel => "Camel",
            Swatch::Navy => "Navy",
            Swatch::Ivory => "Ivory",
            Swatch::Blush => "Blush",
            Swatch::Sage => "Sage",
            Swatch::Charcoal => "Charcoal",
            Swatch::Black => "Black",
        }
    }
}

/// Merchandising badge shown on a product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    Bestseller,
    New,
    Sale,
}

impl Badge {
    pub fn token(self) -> &'static str {
        match self {
            Badge::Bestseller => "badge badge-bestseller",
            Badge::New => "badge badge-new",
            Badge::Sale => "badge badge-sale",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Badge::Bestseller => "Bestseller",
            Badge::New => "New",
            Badge::Sale => "Sale",
        }
    }
}

/// Accent colour for icon tiles (about values, contact channels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Camel,
    Sage,
    Charcoal,
    Blush,
}

impl Accent {
    /// Class for the tinted tile behind an icon.
    pub fn tile_token(self) -> &'static str {
        match self {
            Accent::Camel => "icon-tile accent-camel",
            Accent::Sage => "icon-tile accent-sage",
            Accent::Charcoal => "icon-tile accent-charcoal",
            Accent::Blush => "icon-tile accent-blush",
        }
    }

    /// Class for the hover wash drawn over a card.
    pub fn wash_token(self) -> &'static str {
        match self {
            Accent::Camel => "card-wash wash-camel",
            Accent::Sage => "card-wash wash-sage",
            Accent::Charcoal => "card-wash wash-charcoal",
            Accent::Blush => "card-wash wash-blush",
        }
    }
}

/// Icon names used by the catalog. Rendered as glyphs, no icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Crown,
    Leaf,
    Scissors,
    Award,
    Phone,
    Mail,
    MapPin,
    Instagram,
    Facebook,
    Twitter,
    Youtube,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Crown => "♛",
            Icon::Leaf => "❦",
            Icon::Scissors => "✂",
            Icon::Award => "✪",
            Icon::Phone => "☏",
            Icon::Mail => "✉",
            Icon::MapPin => "⌖",
            Icon::Instagram => "◎",
            Icon::Facebook => "f",
            Icon::Twitter => "𝕏",
            Icon::Youtube => "▶",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Icon::Crown => "icon icon-crown",
            Icon::Leaf => "icon icon-leaf",
            Icon::Scissors => "icon icon-scissors",
            Icon::Award => "icon icon-award",
            Icon::Phone => "icon icon-phone",
            Icon::Mail => "icon icon-mail",
            Icon::MapPin => "icon icon-map-pin",
            Icon::Instagram => "icon icon-instagram",
            Icon::Facebook => "icon icon-facebook",
            Icon::Twitter => "icon icon-twitter",
            Icon::Youtube => "icon icon-youtube",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn swatch_tokens_are_distinct() {
        let tokens: HashSet<_> = Swatch::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(tokens.len(), Swatch::ALL.len());
    }

    #[test]
    fn swatch_deserializes_from_display_name() {
        let swatch: Swatch = serde_json::from_str("\"Charcoal\"").unwrap();
        assert_eq!(swatch, Swatch::Charcoal);
        assert_eq!(swatch.label(), "Charcoal");
    }

    #[test]
    fn unknown_swatch_is_rejected() {
        assert!(serde_json::from_str::<Swatch>("\"Teal\"").is_err());
    }

    #[test]
    fn badge_tokens_follow_label() {
        assert_eq!(Badge::Sale.token(), "badge badge-sale");
        assert_eq!(Badge::New.label(), "New");
    }

    #[test]
    fn accent_and_icon_use_lowercase_keys() {
        let accent: Accent = serde_json::from_str("\"sage\"").unwrap();
        assert_eq!(accent.tile_token(), "icon-tile accent-sage");
        let icon: Icon = serde_json::from_str("\"map-pin\"").unwrap();
        assert_eq!(icon.token(), "icon icon-map-pin");
    }
}
