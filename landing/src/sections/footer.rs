use elegance_storefront::types::{FooterSection, Link, SocialLink};
use elegance_storefront::{NewsletterDraft, Submission};
use leptos::html;
use leptos::prelude::*;

use super::SharedSink;

#[component]
pub fn Footer(
    brand: String,
    tagline: String,
    copyright: String,
    social_links: Vec<SocialLink>,
    sections: Vec<FooterSection>,
    legal_links: Vec<Link>,
    sink: SharedSink,
) -> impl IntoView {
    let newsletter_email = NodeRef::<html::Input>::new();
    let subscribe = move |_| {
        let draft = NewsletterDraft {
            email: newsletter_email
                .get()
                .map(|input| input.value())
                .unwrap_or_default(),
        };
        if let Err(err) = sink.submit(Submission::Newsletter(draft)) {
            tracing::warn!(%err, "newsletter signup not delivered");
        }
    };

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <img src="assets/fashion-logo.jpg" alt=brand.clone() />
                            <span class="footer-title">{brand}</span>
                        </div>
                        <p class="footer-blurb">
                            {tagline}
                            " Discover sophisticated fashion pieces crafted from the finest sustainable "
                            "materials for the modern connoisseur."
                        </p>
                        <div class="footer-social">
                            {social_links
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a href=social.href class="social-link" aria-label=social.label>
                                            <span class=social.icon.token()>{social.icon.glyph()}</span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    {sections
                        .into_iter()
                        .map(|section| {
                            view! {
                                <div class="footer-column">
                                    <h4 class="footer-heading">{section.title}</h4>
                                    <ul>
                                        {section
                                            .links
                                            .into_iter()
                                            .map(|link| view! { <li><a href=link.href class="footer-link">{link.label}</a></li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="newsletter">
                    <div>
                        <h3 class="newsletter-title">"Stay in Touch"</h3>
                        <p class="muted">"Be the first to know about new collections and exclusive offers."</p>
                    </div>
                    <div class="newsletter-form">
                        <input type="email" placeholder="Enter your email" node_ref=newsletter_email />
                        <button class="btn btn-luxury" on:click=subscribe>"Subscribe"</button>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright}</p>
                    <div class="footer-legal">
                        {legal_links
                            .into_iter()
                            .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
