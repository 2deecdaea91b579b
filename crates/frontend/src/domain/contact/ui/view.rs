//! Contact section: info block and the validated form.

use super::view_model::ContactFormViewModel;
use contracts::domain::contact::aggregate::ContactField;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;

const CONTACT_DETAILS: [(&str, &str, &str); 3] = [
    ("✉️", "Email", "contact@qelem.com"),
    ("📞", "Phone", "+251 XXX XXX XXX"),
    ("📍", "Location", "Addis Ababa, Ethiopia"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let vm = ContactFormViewModel::new();

    view! {
        <section id="contact" aria-labelledby="contact-heading">
            <div class="container">
                <div class="contact-grid">
                    <div class="contact-info-block reveal">
                        <div class="section-label">"Contact"</div>
                        <h2 class="section-heading" id="contact-heading">
                            "Get in Touch"
                            <br />
                            "with " <span class="text-accent">"Qelem"</span>
                        </h2>
                        <p class="section-sub">
                            "Have questions about our marketplace or want to join as a BDSP? Reach out — we'd love to hear from you."
                        </p>
                        <div class="contact-details">
                            {CONTACT_DETAILS
                                .into_iter()
                                .map(|(glyph, label, value)| {
                                    view! {
                                        <div class="contact-detail">
                                            <div class="cd-icon">{glyph}</div>
                                            <div>
                                                <div class="cd-label">{label}</div>
                                                <div class="cd-value">{value}</div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="reveal">
                        <ContactForm vm=vm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm(vm: ContactFormViewModel) -> impl IntoView {
    view! {
        <form
            class="contact-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <div class="form-row">
                <Input
                    id="name"
                    label="Name"
                    placeholder="Your full name"
                    autocomplete="name"
                    value=vm.field(ContactField::Name)
                    invalid=vm.has_error(ContactField::Name)
                    on_input=Callback::new(move |value| {
                        vm.set_field(ContactField::Name, value)
                    })
                    on_blur=Callback::new(move |value: String| {
                        vm.blur_field(ContactField::Name, &value)
                    })
                />
                <Input
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="your@email.com"
                    autocomplete="email"
                    value=vm.field(ContactField::Email)
                    invalid=vm.has_error(ContactField::Email)
                    on_input=Callback::new(move |value| {
                        vm.set_field(ContactField::Email, value)
                    })
                    on_blur=Callback::new(move |value: String| {
                        vm.blur_field(ContactField::Email, &value)
                    })
                />
            </div>
            <Input
                id="subject"
                label="Subject"
                placeholder="How can we help you?"
                value=vm.field(ContactField::Subject)
                invalid=vm.has_error(ContactField::Subject)
                on_input=Callback::new(move |value| {
                    vm.set_field(ContactField::Subject, value)
                })
                on_blur=Callback::new(move |value: String| {
                    vm.blur_field(ContactField::Subject, &value)
                })
            />
            <Textarea
                id="message"
                label="Message"
                placeholder="Tell us more about your needs..."
                value=vm.field(ContactField::Message)
                invalid=vm.has_error(ContactField::Message)
                on_input=Callback::new(move |value| {
                    vm.set_field(ContactField::Message, value)
                })
                on_blur=Callback::new(move |value: String| {
                    vm.blur_field(ContactField::Message, &value)
                })
            />

            <Button
                variant="submit"
                button_type="submit"
                disabled=Signal::derive(move || vm.submitting.get())
            >
                {move || {
                    if vm.submitting.get() {
                        view! { "Sending…" }.into_any()
                    } else {
                        view! {
                            "Send Message"
                            {icon("send")}
                        }
                        .into_any()
                    }
                }}
            </Button>

            <Show when=move || vm.success_visible.get()>
                <div class="form-success" role="alert">
                    "✅ Thanks for reaching out! We'll get back to you within 24 hours."
                </div>
            </Show>
        </form>
    }
}
