use elegance_storefront::nav::anchor;
use elegance_storefront::types::MenuItem;
use elegance_storefront::{NavAction, NavState};
use leptos::ev;
use leptos::prelude::*;

use super::BAG_COUNT;

#[component]
pub fn Nav(brand: String, menu: Vec<MenuItem>, scroll_threshold: f64) -> impl IntoView {
    let (nav, set_nav) = signal(NavState::new(scroll_threshold));
    let dispatch = move |action: NavAction| set_nav.update(|state| *state = state.apply(action));

    let scroll_offset = || window().scroll_y().unwrap_or_default();
    dispatch(NavAction::Scrolled(scroll_offset()));
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        dispatch(NavAction::Scrolled(scroll_offset()));
    });
    on_cleanup(move || scroll_listener.remove());

    let drawer_items = StoredValue::new(menu.clone());

    view! {
        <nav class=move || nav.get().bar_class()>
            <div class="nav-inner">
                <a href=format!("#{}", anchor::HOME) class="nav-brand">
                    <img src="assets/fashion-logo.jpg" alt=brand.clone() class="nav-logo" />
                    <span class="nav-title">{brand.clone()}</span>
                </a>

                <div class="nav-links">
                    {menu
                        .into_iter()
                        .map(|item| view! { <a href=item.href class="nav-link">{item.label}</a> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="nav-actions">
                    <NavActions />
                </div>

                <button
                    class="nav-toggle"
                    aria-label=move || nav.get().toggle_label()
                    aria-expanded=move || nav.get().menu_open.to_string()
                    on:click=move |_| dispatch(NavAction::ToggleMenu)
                >
                    {move || nav.get().toggle_glyph()}
                </button>
            </div>

            // Mobile drawer
            <Show when=move || nav.get().menu_open>
                <div class="nav-drawer">
                    {drawer_items
                        .get_value()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="nav-drawer-link"
                                    on:click=move |_| dispatch(NavAction::CloseMenu)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="nav-drawer-actions">
                        <NavActions />
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Search, wishlist and bag buttons. Display only.
#[component]
fn NavActions() -> impl IntoView {
    view! {
        <button class="nav-action" aria-label="Search">"⌕"</button>
        <button class="nav-action" aria-label="Wishlist">"♡"</button>
        <button class="nav-action nav-bag" aria-label="Shopping bag">
            "👜"
            <span class="nav-bag-count">{BAG_COUNT}</span>
        </button>
    }
}
