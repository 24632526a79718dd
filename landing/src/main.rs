// Elegance storefront, Leptos 0.8 edition
// Developed by Elegance Studio (c)2024

mod logging;
mod sections;

use std::sync::Arc;

use elegance_storefront::{Catalog, LogSink, SiteConfig};
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        tracing::error!(%err, "using default site config");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let catalog = Catalog::embedded().unwrap_or_else(|err| {
        tracing::error!(%err, "catalog failed to load; rendering without content");
        Catalog::default()
    });
    let sink: SharedSink = Arc::new(LogSink);
    let timing = config.reveal_timing();
    let copyright = config.copyright();

    view! {
        <Nav brand=config.brand.clone() menu=catalog.menu scroll_threshold=config.scroll_threshold />
        <main>
            <Carousel slides=catalog.slides timing=timing />
            <Hero stats=catalog.hero_stats />
            <ProductShowcase products=catalog.products />
            <About
                brand=config.brand.clone()
                values=catalog.values
                heritage_stats=catalog.heritage_stats
            />
            <Contact
                channels=catalog.contact_channels
                office_hours=catalog.office_hours
                sink=sink.clone()
            />
        </main>
        <Footer
            brand=config.brand
            tagline=config.tagline
            copyright=copyright
            social_links=catalog.social_links
            sections=catalog.footer_sections
            legal_links=catalog.legal_links
            sink=sink
        />
    }
}
