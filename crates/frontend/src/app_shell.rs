//! Page shell: navbar, the marketing sections and the footer composed into
//! the single scrolling page.

use crate::domain::bdsp::ui::directory::DirectorySection;
use crate::domain::contact::ui::view::ContactSection;
use crate::layout::footer::Footer;
use crate::layout::navbar::Navbar;
use crate::sections::hero::HeroSection;
use crate::sections::services::ServicesSection;
use crate::shared::reveal::use_reveal;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    // Scroll-reveal observer over every `.reveal` element below; released
    // together with the shell.
    use_reveal();

    view! {
        <Navbar />
        <main>
            <HeroSection />
            <ServicesSection />
            <DirectorySection />
            <ContactSection />
        </main>
        <Footer />
    }
}
