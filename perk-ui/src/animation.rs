//! Viewport-entry animation
//!
//! An element starts at the `from` keyframe and transitions to `to` the first
//! time it scrolls into view. The transition itself is plain CSS; the only
//! runtime piece is an `IntersectionObserver` that flips a signal.

use std::rc::Rc;

use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::wasm_utils::ViewportObserver;

/// Fraction of the element that must be visible before it counts as entered.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Opacity and vertical offset (CSS pixels, positive is downward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub offset_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceAnimation {
    pub from: Keyframe,
    pub to: Keyframe,
    pub duration_secs: f32,
    /// Play only on the first entry; scrolling away and back does nothing.
    pub once: bool,
}

/// Fade in while sliding up 20px, over half a second, once per mount.
pub const ENTRANCE: EntranceAnimation = EntranceAnimation {
    from: Keyframe {
        opacity: 0.0,
        offset_y: 20.0,
    },
    to: Keyframe {
        opacity: 1.0,
        offset_y: 0.0,
    },
    duration_secs: 0.5,
    once: true,
};

impl EntranceAnimation {
    pub fn keyframe(&self, revealed: bool) -> Keyframe {
        if revealed {
            self.to
        } else {
            self.from
        }
    }

    /// New revealed state after the observer reports `visible`, or `None`
    /// when nothing should be written. With `once`, leaving the viewport never
    /// hides the element again.
    pub fn next_revealed(&self, current: bool, visible: bool) -> Option<bool> {
        if visible == current || (!visible && self.once) {
            None
        } else {
            Some(visible)
        }
    }

    /// Inline style for the current state, including the transition rule so
    /// the change from hidden to revealed animates.
    pub fn style(&self, revealed: bool) -> String {
        let frame = self.keyframe(revealed);
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {}s ease-out, transform {}s ease-out;",
            frame.opacity, frame.offset_y, self.duration_secs, self.duration_secs
        )
    }
}

/// Handle returned by [`use_reveal_once`].
///
/// Wire `onmounted()` onto the element to animate and apply `style()` to it.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    target: Signal<Option<Rc<MountedData>>>,
    revealed: Signal<bool>,
}

impl RevealHandle {
    /// Callback for the animated element's `onmounted`.
    pub fn onmounted(&self) -> impl FnMut(MountedEvent) {
        let mut target = self.target;
        move |evt: MountedEvent| {
            target.set(Some(evt.data()));
        }
    }

    pub fn is_revealed(&self) -> bool {
        (self.revealed)()
    }

    pub fn style(&self) -> String {
        ENTRANCE.style(self.is_revealed())
    }
}

/// Hook that reveals an element the first time it enters the viewport.
///
/// Renderers without DOM elements, and browsers without
/// `IntersectionObserver`, reveal immediately after mount.
pub fn use_reveal_once() -> RevealHandle {
    let target = use_signal(|| None::<Rc<MountedData>>);
    let mut revealed = use_signal(|| false);
    let mut observer: Signal<Option<ViewportObserver>> = use_signal(|| None);

    use_effect(move || {
        let Some(mounted) = target() else {
            return;
        };
        if *revealed.peek() || observer.peek().is_some() {
            return;
        }

        let Some(element) = mounted.downcast::<web_sys_x::Element>().cloned() else {
            revealed.set(true);
            return;
        };

        // The observer callback runs from wasm-bindgen, outside the Dioxus runtime.
        let runtime = Runtime::current();
        let on_change = move |visible: bool| {
            let _guard = RuntimeGuard::new(runtime.clone());
            // Signals may already be dropped if the component unmounted
            // before the observer disconnected.
            let current = match revealed.try_peek() {
                Ok(current) => *current,
                Err(_) => return,
            };
            let Some(next) = ENTRANCE.next_revealed(current, visible) else {
                return;
            };
            debug!("Element visible: {next}");
            if let Ok(mut guard) = revealed.try_write() {
                *guard = next;
            }
        };

        match ViewportObserver::observe(&element, VISIBILITY_THRESHOLD, ENTRANCE.once, on_change) {
            Ok(obs) => observer.set(Some(obs)),
            Err(err) => {
                warn!("Viewport observer unavailable, revealing immediately: {err:?}");
                revealed.set(true);
            }
        }
    });

    use_drop(move || {
        // Disconnect from a task so the JS call does not happen during scope
        // teardown.
        if let Some(obs) = observer.write().take() {
            spawn(async move {
                drop(obs);
            });
        }
    });

    RevealHandle { target, revealed }
}
