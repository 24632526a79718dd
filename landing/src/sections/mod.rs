// Storefront page sections
// Developed by Elegance Studio (c)2024

use std::sync::Arc;

use elegance_storefront::FormSink;

/// Receiver shared by the contact form and the newsletter field.
pub type SharedSink = Arc<dyn FormSink + Send + Sync>;

/// Items shown on the (inert) shopping bag button.
pub const BAG_COUNT: u32 = 2;

mod about;
mod carousel;
mod contact;
mod footer;
mod hero;
mod nav;
mod showcase;

pub use about::About;
pub use carousel::Carousel;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use showcase::ProductShowcase;
