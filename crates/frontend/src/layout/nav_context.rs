use leptos::prelude::*;
use web_sys::window;

/// Scroll offset (px) past which the navbar switches to its condensed
/// style.
const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Navigation state shared across the shell: the navbar scroll flag and the
/// mobile menu.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub scrolled: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            scrolled: RwSignal::new(false),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Recompute the scroll flag from the current offset. Fired on every
    /// scroll event; a pure boolean recompute, so arbitrary frequency is
    /// fine.
    pub fn on_scroll(&self, offset_y: f64) {
        self.scrolled.set(is_past_threshold(offset_y));
    }

    /// Smooth-scroll to a section by element id and close the mobile menu.
    /// Unknown ids are a silent no-op.
    pub fn scroll_to_section(&self, id: &str) {
        if let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            self.menu_open.set(false);
        }
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

fn is_past_threshold(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Hook to use the navigation context.
pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive_at_twenty() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(20.0));
        assert!(is_past_threshold(20.1));
        assert!(is_past_threshold(400.0));
    }
}
