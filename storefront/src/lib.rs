//! # elegance-storefront
//!
//! State and content behind the Elegance single-page storefront.
//!
//! The page itself is a Leptos CSR app (`elegance-landing`). Everything that
//! has behaviour rather than markup lives here so it can be tested on the
//! host:
//!
//! - [`deck`] - carousel cursor ring (`next`, `previous`, `goto`)
//! - [`overlay`] - hotspot markers for the active slide
//! - [`nav`] - scrolled / mobile-menu flags
//! - [`palette`] - exhaustive key to style-token tables
//! - [`forms`] - contact and newsletter drafts, submission sink
//! - [`catalog`] - embedded display content
//! - [`config`] - embedded site settings
//!
//! ## Quick Start
//!
//! ```rust
//! use elegance_storefront::{Catalog, DeckAction, SiteConfig};
//!
//! let catalog = Catalog::embedded()?;
//! let config = SiteConfig::embedded()?;
//!
//! let mut deck = catalog.deck()?;
//! deck.apply(DeckAction::Next);
//!
//! let overlay = deck.overlay(config.reveal_timing());
//! assert_eq!(overlay.markers.len(), deck.current().hotspots.len());
//! # Ok::<(), elegance_storefront::StorefrontError>(())
//! ```
//!
//! ---
//!
//! Developed by Elegance Studio (c)2024

pub mod catalog;
pub mod config;
pub mod deck;
pub mod error;
pub mod forms;
pub mod nav;
pub mod overlay;
pub mod palette;
pub mod types;

pub use catalog::Catalog;
pub use config::{RevealTiming, SiteConfig};
pub use deck::{Cursor, DeckAction, SlideDeck};
pub use error::{Result, StorefrontError};
pub use forms::{ContactDraft, FormSink, LogSink, NewsletterDraft, Submission};
pub use nav::{NavAction, NavState};
pub use overlay::{Marker, Overlay};
