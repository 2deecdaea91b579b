//! Services explainer: what the marketplace offers and why.

use leptos::prelude::*;

const WHY_CARDS: [(&str, &str, &str); 4] = [
    (
        "🎯",
        "Tailored Training",
        "Practical, business-focused guidance designed specifically for the challenges MSMEs face every day.",
    ),
    (
        "💼",
        "Business Experts",
        "Learn from experienced professionals with proven track records across finance, marketing, and operations.",
    ),
    (
        "🔗",
        "Direct Connections",
        "Get matched with reliable BDSPs, mentors, and peers who align with your business goals.",
    ),
    (
        "⚡",
        "Training That Works",
        "Implement actionable ideas immediately — every session is designed for real-world application.",
    ),
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" aria-labelledby="services-heading">
            <div class="container">
                <div class="services-header reveal">
                    <div class="section-label">"What We Offer"</div>
                    <h2 class="section-heading" id="services-heading">
                        "Everything Your Business"
                        <br />
                        "Needs to " <span class="text-accent">"Grow"</span>
                    </h2>
                    <p class="section-sub">
                        "Qelem connects businesses with trusted Business Development Service Providers (BDSPs) for tailored training in finance, marketing, operations, and more."
                    </p>
                </div>

                <div class="services-split">
                    <div class="services-split-visual reveal">
                        <div class="sviz-inner">
                            <div class="sviz-icon">"🤝"</div>
                            <div class="sviz-title">
                                "Connecting MSMEs with the Right Experts"
                            </div>
                            <div class="sviz-desc">
                                "We curate a trusted network of Business Development Service Providers who deliver practical, results-focused training tailored to the Ethiopian market."
                            </div>
                            <div class="sviz-dots">
                                <div class="sviz-dot active"></div>
                                <div class="sviz-dot"></div>
                                <div class="sviz-dot"></div>
                            </div>
                        </div>
                    </div>
                    <div class="why-grid reveal">
                        {WHY_CARDS
                            .into_iter()
                            .map(|(glyph, title, text)| {
                                view! {
                                    <div class="why-card">
                                        <div class="why-icon">{glyph}</div>
                                        <h4>{title}</h4>
                                        <p>{text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
