//! Full-screen lookbook carousel with shoppable hotspots.
//!
//! The deck lives in one `RwSignal`. Slide images are all mounted and
//! cross-faded by class; the hotspot layer is rebuilt from
//! `SlideDeck::overlay` whenever the cursor moves, so only the active slide's
//! markers exist in the DOM.

use elegance_storefront::overlay::{LINK_REL, LINK_TARGET};
use elegance_storefront::types::Slide;
use elegance_storefront::{DeckAction, Marker, Overlay, RevealTiming, SlideDeck};
use leptos::prelude::*;

#[component]
pub fn Carousel(slides: Vec<Slide>, timing: RevealTiming) -> impl IntoView {
    let frames = slides.clone();
    let deck = match SlideDeck::new(slides) {
        Ok(deck) => RwSignal::new(deck),
        Err(err) => {
            tracing::warn!(%err, "carousel hidden");
            return view! { "" }.into_any();
        }
    };
    let count = frames.len();
    // Only a moved cursor notifies; otherwise the hotspot layer would remount
    // and replay its entrance animation
    let dispatch = move |action: DeckAction| deck.maybe_update(|deck| deck.apply(action));

    let on_key = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowLeft" => dispatch(DeckAction::Previous),
        "ArrowRight" => dispatch(DeckAction::Next),
        _ => {}
    };

    view! {
        <section class="carousel" aria-roledescription="carousel" tabindex="0" on:keydown=on_key>
            <div class="carousel-frames">
                {frames
                    .into_iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        let active = move || deck.with(|d| d.cursor().is_active(index));
                        view! {
                            <figure
                                class=move || if active() { "carousel-slide active" } else { "carousel-slide" }
                                aria-hidden=move || (!active()).to_string()
                            >
                                <img src=slide.image alt=slide.title class="carousel-image" />
                                <div class="carousel-gradient"></div>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || {
                let (overlay, slide) = deck.with(|d| (d.overlay(timing), d.current().clone()));
                view! { <HotspotLayer overlay=overlay slide=slide /> }
            }}

            <button
                class="carousel-arrow prev"
                aria-label="Previous look"
                on:click=move |_| dispatch(DeckAction::Previous)
            >
                "‹"
            </button>
            <button
                class="carousel-arrow next"
                aria-label="Next look"
                on:click=move |_| dispatch(DeckAction::Next)
            >
                "›"
            </button>

            <div class="carousel-dots">
                {(0..count)
                    .map(|index| {
                        view! {
                            <button
                                class=move || {
                                    if deck.with(|d| d.cursor().is_active(index)) {
                                        "carousel-dot active"
                                    } else {
                                        "carousel-dot"
                                    }
                                }
                                aria-label=format!("Show look {}", index + 1)
                                on:click=move |_| dispatch(DeckAction::Goto(index))
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}

/// Markers and caption for the active slide.
#[component]
fn HotspotLayer(overlay: Overlay, slide: Slide) -> impl IntoView {
    let caption_style = format!("animation-delay: {}ms;", overlay.caption_delay_ms);
    view! {
        <div class="hotspot-layer" data-slide=overlay.slide_id.to_string()>
            {overlay.markers.into_iter().map(|marker| view! { <HotspotMarker marker=marker /> }).collect::<Vec<_>>()}
            <div class="carousel-caption" style=caption_style>
                <h3 class="carousel-title">{slide.title}</h3>
                <p class="carousel-description">{slide.description}</p>
            </div>
        </div>
    }
}

#[component]
fn HotspotMarker(marker: Marker) -> impl IntoView {
    let style = marker.style();
    let aria_label = marker.aria_label();
    view! {
        <a
            class="hotspot"
            href=marker.href
            target=LINK_TARGET
            rel=LINK_REL
            style=style
            aria-label=aria_label
        >
            <span class="hotspot-ping"></span>
            <span class="hotspot-dot">"👜"</span>
            <span class="hotspot-tooltip">
                <span class="hotspot-label">{marker.label}</span>
                <span class="hotspot-price">{marker.price}</span>
            </span>
        </a>
    }
}
