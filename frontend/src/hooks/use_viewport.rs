use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Viewport width at or below which the calendar renders as week strips.
pub const NARROW_THRESHOLD: f64 = 480.0;
/// Debounce applied to resize events before re-evaluating the threshold.
const RESIZE_DEBOUNCE_MS: u32 = 150;

fn viewport_is_narrow() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width <= NARROW_THRESHOLD)
        .unwrap_or(false)
}

/// Debounced narrow/wide viewport flag.
///
/// The state is eq-guarded, so only crossings of the threshold re-render;
/// the resize listener decides layout and nothing else.
#[hook]
pub fn use_narrow_viewport() -> bool {
    let narrow = use_state_eq(viewport_is_narrow);

    {
        let narrow = narrow.clone();
        use_effect_with((), move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    let narrow = narrow.clone();
                    let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                        narrow.set(viewport_is_narrow());
                    });
                    // Replacing the previous timeout cancels it
                    *pending.borrow_mut() = Some(timeout);
                })
            });
            move || drop(listener)
        });
    }

    *narrow
}
