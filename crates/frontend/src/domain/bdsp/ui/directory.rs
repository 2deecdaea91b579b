//! BDSP directory: filter tabs plus the trainer card grid.
//!
//! The catalog itself is fixed data from `contracts`; switching tabs only
//! recomputes the visible subset.

use super::state::create_state;
use crate::shared::components::ui::Badge;
use contracts::domain::bdsp::aggregate::{visible_profiles, DirectoryFilter, TrainerProfile};
use leptos::prelude::*;

#[component]
pub fn DirectorySection() -> impl IntoView {
    let state = create_state();

    view! {
        <section id="bdsp" aria-labelledby="bdsp-heading">
            <div class="container">
                <div class="bdsp-header reveal">
                    <div>
                        <div class="section-label">"BDSP Directory"</div>
                        <h2 class="section-heading" id="bdsp-heading">
                            "Meet Our " <span class="text-accent">"Expert Trainers"</span>
                        </h2>
                        <p class="section-sub">
                            "Handpicked professionals ready to guide your business forward."
                        </p>
                    </div>
                    <div class="filter-tabs" role="group" aria-label="Filter trainers by category">
                        {DirectoryFilter::tabs()
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="filter-tab"
                                        class:active=move || state.get().filter == tab
                                        on:click=move |_| state.update(|s| s.filter = tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="trainers-grid">
                    <For
                        each=move || visible_profiles(state.get().filter)
                        key=|profile| profile.id
                        children=move |profile: TrainerProfile| {
                            view! { <TrainerCard profile=profile /> }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

/// Star string for a rating: one `★` per full star, `☆` for a half,
/// padded with `☆` to five glyphs.
fn render_stars(rating: f64) -> String {
    let full = rating.floor() as usize;
    let mut stars = "★".repeat(full);
    if rating.fract() != 0.0 {
        stars.push('☆');
    }
    stars.push_str(&"☆".repeat(5usize.saturating_sub(rating.ceil() as usize)));
    stars
}

#[component]
fn TrainerCard(profile: TrainerProfile) -> impl IntoView {
    let stars = render_stars(profile.rating);
    let rating_line = format!("{:.1} · {} sessions", profile.rating, profile.sessions);
    let name_for_connect = profile.name.clone();

    view! {
        <div class="trainer-card reveal" data-category=profile.category.as_str()>
            <div class="trainer-card-top">
                {profile
                    .badge
                    .map(|badge| view! { <Badge class="trainer-badge">{badge}</Badge> })}
                <div
                    class="trainer-avatar"
                    style=format!("background: {}", profile.avatar_gradient)
                >
                    {profile.initials}
                </div>
                <div class="trainer-name">{profile.name}</div>
                <div class="trainer-title">{profile.title}</div>
            </div>
            <div class="trainer-card-body">
                <div class="expertise-label">"Areas of Expertise"</div>
                <div class="expertise-tags">
                    {profile
                        .expertise
                        .into_iter()
                        .map(|area| view! { <span class="expertise-tag">{area}</span> })
                        .collect_view()}
                </div>
                <div class="trainer-rating">
                    <span class="stars">{stars}</span>
                    <span>{rating_line}</span>
                </div>
                <button
                    class="btn-connect"
                    on:click=move |_| log::info!("connect requested: {}", name_for_connect)
                >
                    "Connect"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_ratings_render_solid_stars() {
        assert_eq!(render_stars(5.0), "★★★★★");
        assert_eq!(render_stars(4.0), "★★★★☆");
    }

    #[test]
    fn fractional_ratings_get_an_open_star() {
        assert_eq!(render_stars(4.9), "★★★★☆");
        assert_eq!(render_stars(4.7), "★★★★☆");
        assert_eq!(render_stars(3.5), "★★★☆☆");
    }

    #[test]
    fn star_strings_are_always_five_glyphs() {
        for rating in [0.0, 0.5, 3.5, 4.7, 4.8, 4.9, 5.0] {
            assert_eq!(render_stars(rating).chars().count(), 5, "rating {rating}");
        }
    }
}
