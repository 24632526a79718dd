use elegance_storefront::nav::anchor;
use elegance_storefront::types::Product;
use leptos::prelude::*;

#[component]
pub fn ProductShowcase(products: Vec<Product>) -> impl IntoView {
    view! {
        <section id=anchor::COLLECTION class="showcase">
            <div class="container">
                <div class="section-header">
                    <div class="pill">
                        <span class="pill-icon">"★"</span>
                        "Featured Collection"
                    </div>
                    <h2 class="section-title">
                        <span class="tone-charcoal">"Curated"</span>
                        <br />
                        <span class="tone-luxury">"Essentials"</span>
                    </h2>
                    <p class="section-description">
                        "Thoughtfully selected pieces that embody timeless sophistication and modern elegance. "
                        "Each item is crafted from the finest materials and designed to last generations."
                    </p>
                </div>

                <div class="product-grid">
                    {products
                        .into_iter()
                        .enumerate()
                        .map(|(index, product)| view! { <ProductCard product=product position=index /> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="section-cta">
                    <button class="btn btn-luxury btn-large">
                        "View Full Collection"
                        <span class="btn-arrow">"→"</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product, position: usize) -> impl IntoView {
    // Cards rise in one after another
    let stagger = format!("animation-delay: {}ms;", 100 + position * 200);
    let rating = product.rating_label();
    let reviews = product.reviews_label();

    view! {
        <article class="product-card fade-up" style=stagger>
            <div class="product-media">
                <img src=product.image alt=product.name.clone() class="product-image" />
                {product.badge.map(|badge| view! { <span class=badge.token()>{badge.label()}</span> })}
                <div class="product-quick">
                    <button class="round-btn" aria-label="Add to wishlist">"♡"</button>
                    <button class="round-btn" aria-label="Quick view">"◉"</button>
                </div>
                <div class="product-add">
                    <button class="btn btn-luxury btn-block">"Add to Cart"</button>
                </div>
            </div>

            <div class="product-body">
                <div class="product-meta">
                    <span class="product-category">{product.category}</span>
                    <span class="product-rating">
                        <span class="star">"★"</span>
                        <span>{rating}</span>
                        <span class="muted">{reviews}</span>
                    </span>
                </div>
                <h3 class="product-name">{product.name}</h3>
                <p class="product-description">{product.description}</p>

                <div class="product-colors">
                    <span class="muted small">"Colors:"</span>
                    {product
                        .colors
                        .into_iter()
                        .map(|swatch| {
                            view! { <span class=format!("swatch {}", swatch.token()) title=swatch.label()></span> }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="product-sizes">
                    {product
                        .sizes
                        .into_iter()
                        .map(|size| view! { <span class="size-chip">{size}</span> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="product-price">
                    <span class="price">{product.price}</span>
                    {product.original_price.map(|was| view! { <span class="price-was">{was}</span> })}
                </div>
            </div>
        </article>
    }
}
