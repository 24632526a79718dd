use elegance_storefront::nav::anchor;
use elegance_storefront::types::{ContactChannel, OfficeHours};
use elegance_storefront::{ContactDraft, Submission};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use super::SharedSink;

fn input_value(node: NodeRef<html::Input>) -> String {
    node.get().map(|input| input.value()).unwrap_or_default()
}

#[component]
pub fn Contact(
    channels: Vec<ContactChannel>,
    office_hours: Vec<OfficeHours>,
    sink: SharedSink,
) -> impl IntoView {
    // Inputs stay uncontrolled; values are read once, on submit
    let first_name = NodeRef::<html::Input>::new();
    let last_name = NodeRef::<html::Input>::new();
    let email = NodeRef::<html::Input>::new();
    let company = NodeRef::<html::Input>::new();
    let message = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            first_name: input_value(first_name),
            last_name: input_value(last_name),
            email: input_value(email),
            company: input_value(company),
            message: message.get().map(|area| area.value()).unwrap_or_default(),
        };
        if let Err(err) = sink.submit(Submission::Contact(draft)) {
            tracing::warn!(%err, "contact message not delivered");
        }
    };

    view! {
        <section id=anchor::CONTACT class="contact">
            <div class="container">
                <div class="section-header">
                    <div class="pill">
                        <span class="pill-icon">"✉"</span>
                        "Contact Us"
                    </div>
                    <h2 class="section-title">
                        <span class="tone-charcoal">"Ready to"</span>
                        <br />
                        <span class="tone-luxury">"Get Started?"</span>
                    </h2>
                    <p class="section-description">
                        "Book a personal styling session or ask about a piece from the collection. "
                        "Our atelier team will get back to you."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="card contact-form-card">
                        <h3 class="card-title">"Send us a message"</h3>
                        <form class="contact-form" on:submit=on_submit>
                            <div class="form-row">
                                <label class="field">
                                    <span class="field-label">"First Name"</span>
                                    <input type="text" placeholder="Astrid" node_ref=first_name />
                                </label>
                                <label class="field">
                                    <span class="field-label">"Last Name"</span>
                                    <input type="text" placeholder="Lindqvist" node_ref=last_name />
                                </label>
                            </div>
                            <label class="field">
                                <span class="field-label">"Email"</span>
                                <input type="email" placeholder="astrid@example.com" node_ref=email />
                            </label>
                            <label class="field">
                                <span class="field-label">"Company"</span>
                                <input type="text" placeholder="Your Company" node_ref=company />
                            </label>
                            <label class="field">
                                <span class="field-label">"Message"</span>
                                <textarea rows="5" placeholder="Tell us what you are looking for..." node_ref=message></textarea>
                            </label>
                            <button type="submit" class="btn btn-luxury btn-block">
                                "Send Message"
                                <span class="btn-arrow">"➤"</span>
                            </button>
                        </form>
                    </div>

                    <div class="contact-info">
                        <div>
                            <h3 class="card-title">"Get in touch"</h3>
                            <p class="muted">
                                "We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                            </p>
                        </div>

                        <div class="channel-list">
                            {channels
                                .into_iter()
                                .map(|channel| {
                                    view! {
                                        <div class="channel">
                                            <div class=channel.accent.tile_token()>
                                                <span class=channel.icon.token()>{channel.icon.glyph()}</span>
                                            </div>
                                            <div>
                                                <h4 class="channel-title">{channel.title}</h4>
                                                <p class="muted">{channel.detail}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        <div class="card office-hours">
                            <h4 class="channel-title">"Office Hours"</h4>
                            {office_hours
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <div class="hours-row">
                                            <span>{row.days}</span>
                                            <span>{row.hours}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
