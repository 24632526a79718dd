use elegance_storefront::nav::anchor;
use elegance_storefront::types::Stat;
use leptos::prelude::*;

#[component]
pub fn Hero(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section id=anchor::HOME class="hero">
            <div class="hero-pattern"></div>
            <div class="container hero-content">
                <div class="pill fade-up" style="animation-delay: 400ms;">
                    <span class="pill-dot"></span>
                    "Stockholm Collection 2024"
                </div>
                <h1 class="hero-title fade-up" style="animation-delay: 600ms;">
                    <span class="tone-charcoal">"Timeless"</span>
                    <span class="tone-luxury">"Elegance"</span>
                    <span class="tone-warm">"Redefined"</span>
                </h1>
                <p class="hero-description fade-up" style="animation-delay: 800ms;">
                    "Discover sophisticated fashion pieces that blend old money aesthetics with "
                    "contemporary Stockholm minimalism. Curated for the modern connoisseur."
                </p>
                <div class="hero-actions fade-up" style="animation-delay: 1000ms;">
                    <a href=format!("#{}", anchor::COLLECTION) class="btn btn-luxury">
                        "Shop Collection"
                        <span class="btn-arrow">"→"</span>
                    </a>
                    <button class="btn btn-elegant">"View Lookbook"</button>
                </div>
                <div class="hero-stats fade-up" style="animation-delay: 1200ms;">
                    {stats
                        .into_iter()
                        .map(|stat| view! { <StatBlock stat=stat /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Value over caption, shared with the heritage panel.
#[component]
pub fn StatBlock(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
