use leptos::prelude::*;

/// Small label badge
#[component]
pub fn Badge(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {}", additional_class())>
            {children()}
        </span>
    }
}
