use crate::app_shell::AppShell;
use crate::layout::nav_context::NavContext;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state (scroll flag + mobile menu) shared via context.
    provide_context(NavContext::new());

    view! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}
