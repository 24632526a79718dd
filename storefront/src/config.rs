//! Site configuration.
//!
//! Branding and animation timing live in `site.toml`, compiled into the
//! binary. Every field has a default, so a partial document only overrides
//! what it names.

use serde::{Deserialize, Serialize};

use crate::error::Result;

const EMBEDDED_SITE_TOML: &str = include_str!("../site.toml");

/// Gap between a marker appearing and its slide caption appearing.
const CAPTION_AFTER_MARKERS_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub copyright_year: u16,
    /// Vertical scroll offset (CSS px) past which the nav bar turns solid
    pub scroll_threshold: f64,
    pub hotspot_reveal_delay_ms: u32,
    /// Extra reveal delay per slide position
    pub hotspot_stagger_ms: u32,
    /// Max level for the console log subscriber
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Elegance".into(),
            tagline: "Timeless elegance meets Stockholm minimalism.".into(),
            copyright_year: 2024,
            scroll_threshold: 50.0,
            hotspot_reveal_delay_ms: 500,
            hotspot_stagger_ms: 100,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// The configuration shipped with the site.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_SITE_TOML)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn reveal_timing(&self) -> RevealTiming {
        RevealTiming {
            base_ms: self.hotspot_reveal_delay_ms,
            stagger_ms: self.hotspot_stagger_ms,
        }
    }

    /// Footer copyright line.
    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year, self.brand
        )
    }
}

/// Entrance animation delays for hotspot markers and slide captions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
    pub base_ms: u32,
    pub stagger_ms: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        SiteConfig::default().reveal_timing()
    }
}

impl RevealTiming {
    pub fn marker_delay_ms(self, slide_index: usize) -> u32 {
        let index = u32::try_from(slide_index).unwrap_or(u32::MAX);
        self.base_ms
            .saturating_add(self.stagger_ms.saturating_mul(index))
    }

    pub fn caption_delay_ms(self, slide_index: usize) -> u32 {
        self.marker_delay_ms(slide_index)
            .saturating_add(CAPTION_AFTER_MARKERS_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.brand, "Elegance");
        assert_eq!(config.scroll_threshold, 50.0);
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_document_overrides_named_fields_only() {
        let config =
            SiteConfig::from_toml_str("brand = \"Maison\"\nscroll_threshold = 80.0\n").unwrap();
        assert_eq!(
            config,
            SiteConfig {
                brand: "Maison".into(),
                scroll_threshold: 80.0,
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = SiteConfig::from_toml_str("scroll_threshold = \"far\"").unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }

    #[test]
    fn copyright_uses_brand_and_year() {
        assert_eq!(
            SiteConfig::default().copyright(),
            "© 2024 Elegance. All rights reserved."
        );
    }

    #[test]
    fn reveal_timing_staggers_by_slide() {
        let timing = RevealTiming {
            base_ms: 500,
            stagger_ms: 100,
        };
        assert_eq!(timing.marker_delay_ms(0), 500);
        assert_eq!(timing.marker_delay_ms(3), 800);
        assert_eq!(timing.caption_delay_ms(1), 700);
        assert_eq!(timing.marker_delay_ms(usize::MAX), u32::MAX);
    }
}
