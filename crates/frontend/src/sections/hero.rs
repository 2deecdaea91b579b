//! Hero banner: headline, CTAs, stat figures and the decorative visual
//! column.

use crate::layout::nav_context::use_nav;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

const HERO_STATS: [(&str, &str); 3] = [
    ("200+", "Expert Trainers"),
    ("50+", "Service Categories"),
    ("1,400+", "MSMEs Served"),
];

const GROWTH_AREAS: [(&str, u32); 3] = [
    ("Finance & Accounting", 82),
    ("Digital Marketing", 68),
    ("Operations & Logistics", 55),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let nav = use_nav();

    view! {
        <section id="hero" aria-label="Hero">
            <div class="hero-pattern"></div>
            <div class="hero-glow"></div>
            <div class="hero-glow2"></div>
            <div class="container">
                <div class="hero-inner">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span></span>
                            "Launched in Ethiopia"
                        </div>
                        <h1 class="hero-heading">
                            "Ethiopia's First " <em>"Skill-Building"</em>
                            " Marketplace for MSMEs"
                        </h1>
                        <p class="hero-sub">
                            "Qelem connects small and medium-sized enterprises (MSMEs) with trusted experts to unlock growth."
                        </p>
                        <div class="hero-cta-group">
                            <Button on_click=Callback::new(move |_| nav.scroll_to_section("services"))>
                                "Explore Services"
                                {icon("arrow-right")}
                            </Button>
                            <Button
                                variant="ghost"
                                on_click=Callback::new(move |_| nav.scroll_to_section("bdsp"))
                            >
                                "Meet Our Trainers"
                            </Button>
                        </div>
                        <div class="hero-stats">
                            {HERO_STATS
                                .into_iter()
                                .map(|(figure, caption)| {
                                    view! {
                                        <div class="hero-stat">
                                            <strong>{figure}</strong>
                                            <span>{caption}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <HeroVisual />
                </div>
            </div>
        </section>
    }
}

/// Decorative preview cards shown next to the hero copy.
#[component]
fn HeroVisual() -> impl IntoView {
    view! {
        <div class="hero-visual" aria-hidden="true">
            <div class="hero-card">
                <div class="hero-card-top">
                    <div class="hc-avatar">"A"</div>
                    <div class="hc-info">
                        <strong>"Amanuel Bekele"</strong>
                        <span>"Financial Literacy Expert"</span>
                    </div>
                </div>
                <div class="hc-tags">
                    <span class="hc-tag">"Finance"</span>
                    <span class="hc-tag">"Budgeting"</span>
                    <span class="hc-tag">"Business Planning"</span>
                </div>
            </div>

            <div class="hero-card-pair">
                <div class="hero-card hero-card--tile">
                    <div class="hc-tile-label">"Active Sessions"</div>
                    <div class="hc-tile-value">"38"</div>
                    <div class="hc-tile-caption">"Today"</div>
                </div>
                <div class="hero-card hero-card--tile">
                    <div class="hc-tile-label">"Rating"</div>
                    <div class="hc-tile-value hc-tile-value--accent">"4.9"</div>
                    <div class="hc-tile-caption">"★★★★★"</div>
                </div>
            </div>

            <div class="hero-card-lg">
                <div class="hcl-label">"Business Growth Areas"</div>
                <div class="hcl-progress-list">
                    {GROWTH_AREAS
                        .into_iter()
                        .map(|(label, percent)| {
                            view! {
                                <div class="hcl-prog-item">
                                    <div class="hcl-prog-label">
                                        <span>{label}</span>
                                        <span>{format!("{}%", percent)}</span>
                                    </div>
                                    <div class="hcl-bar">
                                        <div
                                            class="hcl-fill"
                                            style=format!("width: {}%", percent)
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
