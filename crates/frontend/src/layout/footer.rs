use crate::layout::nav_context::use_nav;
use leptos::prelude::*;

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("hero", "Home"),
    ("services", "Services"),
    ("bdsp", "BDSP Directory"),
    ("contact", "Contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_nav();

    view! {
        <footer>
            <div class="container">
                <div class="footer-inner">
                    <div class="footer-logo">"Qelem"</div>
                    <p class="footer-copy">"© 2025 Qelem Marketplace. All rights reserved."</p>
                    <nav class="footer-links" aria-label="Footer navigation">
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|(section, label)| {
                                view! {
                                    <button on:click=move |_| nav.scroll_to_section(section)>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </footer>
    }
}
