//! Fixed top navbar: logo, anchor links, theme toggle and the mobile menu
//! button. Owns the passive scroll listener that drives the condensed
//! navbar style.

use crate::layout::nav_context::{use_nav, NavContext};
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Section anchors shown in the navbar, in order.
const NAV_LINKS: [(&str, &str); 4] = [
    ("hero", "Home"),
    ("services", "Services"),
    ("bdsp", "BDSP Directory"),
    ("contact", "Contact Us"),
];

/// Register a passive `scroll` listener that keeps `NavContext::scrolled`
/// in sync with the viewport. Removed again on cleanup.
fn install_scroll_listener(nav: NavContext) {
    let Some(win) = window() else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if let Some(win) = window() {
            if let Ok(offset) = win.scroll_y() {
                nav.on_scroll(offset);
            }
        }
    });

    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    if win
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        return;
    }

    let handle = StoredValue::new_local(Some(closure));
    on_cleanup(move || {
        if let Some(closure) = handle.try_update_value(|h| h.take()).flatten() {
            if let Some(win) = window() {
                let _ = win
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        }
    });
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_nav();

    install_scroll_listener(nav);

    view! {
        <nav
            id="navbar"
            class:scrolled=move || nav.scrolled.get()
            role="navigation"
            aria-label="Main navigation"
        >
            <div class="container">
                <div class="nav-inner">
                    <button
                        class="logo"
                        on:click=move |_| nav.scroll_to_section("hero")
                        aria-label="Qelem Home"
                    >
                        <div class="logo-mark">"Q"</div>
                        "Qelem"
                    </button>

                    <ul class="nav-links" class:open=move || nav.menu_open.get()>
                        {NAV_LINKS
                            .into_iter()
                            .map(|(section, label)| {
                                view! {
                                    <li>
                                        <button on:click=move |_| nav.scroll_to_section(section)>
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="nav-actions">
                        <ThemeToggle />
                        <button
                            class="menu-toggle"
                            on:click=move |_| nav.toggle_menu()
                            aria-label="Open menu"
                            aria-expanded=move || nav.menu_open.get().to_string()
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
