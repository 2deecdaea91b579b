//! Scroll reveal: one-shot visibility transitions driven by an
//! IntersectionObserver.
//!
//! Elements opt in with the `reveal` class. When enough of an element enters
//! the viewport it receives the `visible` class after a stagger delay of
//! 80 ms per preceding `.reveal` sibling in the same parent, and is
//! unobserved; the transition never reverses. The actual appearance
//! animation lives in the stylesheet (`.reveal` / `.reveal.visible`).

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

const REVEAL_SELECTOR: &str = ".reveal";
const VISIBLE_CLASS: &str = "visible";

/// Fraction of an element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.12;
/// Pulls the trigger line 40px up from the bottom edge of the viewport, so
/// elements start revealing slightly before they fully enter.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
/// Delay between consecutive siblings of a revealed group.
const STAGGER_STEP_MS: u32 = 80;

/// Stagger delay for the element at `index` among its reveal siblings.
fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// Position of `target` among the `.reveal` elements under its parent.
fn sibling_index(target: &Element) -> usize {
    let Some(parent) = target.parent_element() else {
        return 0;
    };
    let Ok(siblings) = parent.query_selector_all(REVEAL_SELECTOR) else {
        return 0;
    };
    let target: &JsValue = target.as_ref();
    (0..siblings.length())
        .filter_map(|i| siblings.item(i))
        .position(|node| AsRef::<JsValue>::as_ref(&node) == target)
        .unwrap_or(0)
}

/// Add the `visible` class once the stagger delay has elapsed. A timer that
/// outlives the observer must not touch the page.
fn reveal_after_stagger(target: Element, index: usize, torn_down: Rc<Cell<bool>>) {
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(stagger_delay_ms(index)).await;
        if torn_down.get() {
            return;
        }
        let _ = target.class_list().add_1(VISIBLE_CLASS);
    });
}

struct RevealHandle {
    observer: IntersectionObserver,
    torn_down: Rc<Cell<bool>>,
    // Kept alive for as long as the observer may call back into it.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// Observe every `.reveal` element for the lifetime of the calling
/// component.
///
/// Runs after mount (the sections have to be in the DOM before they can be
/// discovered); all observation is released on cleanup.
pub fn use_reveal() {
    let handle = StoredValue::new_local(None::<RevealHandle>);

    Effect::new(move |_| {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };

        let torn_down = Rc::new(Cell::new(false));

        let callback_torn_down = torn_down.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    // One-shot: stop observing before the stagger timer runs
                    // so the element can never re-trigger.
                    observer.unobserve(&target);
                    let index = sibling_index(&target);
                    reveal_after_stagger(target, index, callback_torn_down.clone());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };

        if let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) {
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    observer.observe(node.unchecked_ref());
                }
            }
        }

        handle.set_value(Some(RevealHandle {
            observer,
            torn_down,
            _callback: callback,
        }));
    });

    on_cleanup(move || {
        if let Some(handle) = handle.try_update_value(|h| h.take()).flatten() {
            handle.torn_down.set(true);
            handle.observer.disconnect();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_eighty_ms_per_sibling() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 80);
        assert_eq!(stagger_delay_ms(5), 400);
    }
}
