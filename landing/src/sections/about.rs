use elegance_storefront::nav::anchor;
use elegance_storefront::types::{Stat, ValueCard};
use leptos::prelude::*;

use super::hero::StatBlock;

#[component]
pub fn About(brand: String, values: Vec<ValueCard>, heritage_stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section id=anchor::ABOUT class="about">
            <div class="about-blur blur-sage"></div>
            <div class="about-blur blur-blush"></div>
            <div class="container">
                <div class="section-header">
                    <div class="pill">
                        <span class="pill-icon">"♛"</span>
                        "Our Story"
                    </div>
                    <h2 class="section-title">
                        <span class="tone-charcoal">"Crafted with"</span>
                        <br />
                        <span class="tone-luxury">"Purpose"</span>
                    </h2>
                    <p class="section-description">
                        {format!(
                            "Born from a passion for timeless elegance and sustainable luxury, {brand} represents \
                             the perfect marriage of Stockholm minimalism and old money sophistication."
                        )}
                    </p>
                </div>

                <div class="value-grid">
                    {values
                        .into_iter()
                        .enumerate()
                        .map(|(index, value)| {
                            let stagger = format!("animation-delay: {}ms;", 200 + index * 300);
                            view! {
                                <article class="value-card fade-up" style=stagger>
                                    <div class=value.accent.tile_token()>
                                        <span class=value.icon.token()>{value.icon.glyph()}</span>
                                    </div>
                                    <h3 class="value-title">{value.title}</h3>
                                    <p class="value-description">{value.description}</p>
                                    <div class=value.accent.wash_token()></div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="heritage">
                    <div class="heritage-story">
                        <h3 class="heritage-title">"Heritage Meets Innovation"</h3>
                        <p>
                            "Our journey began in Stockholm's fashion district, where traditional Scandinavian "
                            "design principles met the timeless elegance of old money aesthetics. Each piece "
                            "in our collection tells a story of meticulous craftsmanship and unwavering "
                            "attention to detail."
                        </p>
                        <p>
                            "We believe that true luxury lies not in excess, but in the perfect balance of "
                            "form, function, and responsibility. Our commitment to sustainable practices "
                            "ensures that elegance and ethics walk hand in hand."
                        </p>
                    </div>
                    <div class="heritage-stats">
                        {heritage_stats
                            .into_iter()
                            .map(|stat| view! { <StatBlock stat=stat /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
