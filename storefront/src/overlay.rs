//! Hotspot overlay model.
//!
//! An [`Overlay`] is the exact set of markers to draw over one slide. The
//! carousel view renders `deck.overlay(..)` and nothing else, so markers can
//! never outlive the slide they belong to.

use crate::config::RevealTiming;
use crate::types::Slide;

/// Hotspot links open in a fresh browsing context.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// One positioned marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: String,
    pub label: String,
    pub price: String,
    pub href: String,
    pub left_pct: f64,
    pub top_pct: f64,
    pub reveal_delay_ms: u32,
}

impl Marker {
    /// Inline style anchoring the marker centre on its coordinates.
    ///
    /// The centring translate lives in the `.hotspot` class; only the
    /// per-marker values go inline.
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}ms;",
            self.left_pct, self.top_pct, self.reveal_delay_ms
        )
    }

    /// Accessible name for the link ("Silk Scarf, €180").
    pub fn aria_label(&self) -> String {
        format!("{}, {}", self.label, self.price)
    }
}

/// Markers for a single slide.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    pub slide_id: u32,
    pub markers: Vec<Marker>,
    /// Entrance delay for the slide caption
    pub caption_delay_ms: u32,
}

impl Overlay {
    /// Markers for `slide`, shown at position `slide_index` in the deck.
    pub fn for_slide(slide: &Slide, slide_index: usize, timing: RevealTiming) -> Self {
        let delay = timing.marker_delay_ms(slide_index);
        let markers = slide
            .hotspots
            .iter()
            .map(|hotspot| Marker {
                id: hotspot.id.clone(),
                label: hotspot.label.clone(),
                price: hotspot.price.clone(),
                href: hotspot.link.clone(),
                left_pct: hotspot.x,
                top_pct: hotspot.y,
                reveal_delay_ms: delay,
            })
            .collect();

        Self {
            slide_id: slide.id,
            markers,
            caption_delay_ms: timing.caption_delay_ms(slide_index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn hotspot_ids(&self) -> Vec<&str> {
        self.markers.iter().map(|m| m.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hotspot;
    use pretty_assertions::assert_eq;

    fn scarf() -> Hotspot {
        Hotspot {
            id: "scarf3".into(),
            x: 45.0,
            y: 25.0,
            label: "Silk Scarf".into(),
            link: "https://shopee.co.id/search?keyword=silk%20scarf".into(),
            price: "€180".into(),
        }
    }

    #[test]
    fn slide_without_hotspots_yields_no_markers() {
        let slide = Slide {
            id: 4,
            ..Default::default()
        };
        let overlay = Overlay::for_slide(&slide, 0, RevealTiming::default());
        assert!(overlay.is_empty());
        assert_eq!(overlay.slide_id, 4);
    }

    #[test]
    fn marker_copies_hotspot_fields() {
        let slide = Slide {
            id: 3,
            hotspots: vec![scarf()],
            ..Default::default()
        };
        let overlay = Overlay::for_slide(&slide, 2, RevealTiming::default());
        assert_eq!(
            overlay.markers,
            vec![Marker {
                id: "scarf3".into(),
                label: "Silk Scarf".into(),
                price: "€180".into(),
                href: "https://shopee.co.id/search?keyword=silk%20scarf".into(),
                left_pct: 45.0,
                top_pct: 25.0,
                reveal_delay_ms: 700,
            }]
        );
        assert_eq!(overlay.caption_delay_ms, 800);
    }

    #[test]
    fn style_places_marker_by_percent() {
        let slide = Slide {
            hotspots: vec![scarf()],
            ..Default::default()
        };
        let overlay = Overlay::for_slide(&slide, 0, RevealTiming::default());
        assert_eq!(
            overlay.markers[0].style(),
            "left: 45%; top: 25%; animation-delay: 500ms;"
        );
        assert_eq!(overlay.markers[0].aria_label(), "Silk Scarf, €180");
    }

    #[test]
    fn out_of_range_coordinates_pass_through() {
        let slide = Slide {
            hotspots: vec![Hotspot {
                x: 130.5,
                y: -10.0,
                ..scarf()
            }],
            ..Default::default()
        };
        let overlay = Overlay::for_slide(&slide, 0, RevealTiming::default());
        assert!(overlay.markers[0].style().starts_with("left: 130.5%; top: -10%;"));
    }
}
