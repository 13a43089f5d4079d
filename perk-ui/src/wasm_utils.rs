//! WASM utilities for browser interop
//!
//! # Cleanup Pattern
//!
//! A JavaScript callback backed by a Rust `Closure` must live as long as the
//! browser holds on to it. Instead of `closure.forget()`, which leaks the
//! closure and leaves the callback attached forever, each wrapper here owns its
//! closure and detaches it in `Drop`:
//!
//! ```ignore
//! // Listener is attached when WindowEventListener is created
//! let listener = WindowEventListener::new(window, "resize", callback);
//!
//! // Listener is removed when `listener` is dropped
//! drop(listener);
//! ```
//!
//! Store the wrapper in a `Signal<Option<_>>` and take it out in `use_drop`.
//! Spawn the actual drop so the JS call does not run inside the diff cycle.

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowEventListener {
    /// Attaches `callback` to `event_name` on the window.
    pub fn new(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

type IntersectionCallback = Closure<dyn FnMut(js_sys_x::Array, web_sys_x::IntersectionObserver)>;

/// An `IntersectionObserver` watching a single element.
///
/// Disconnects when dropped. With `once` set, it also disconnects itself
/// after reporting the first time the element enters the viewport.
pub struct ViewportObserver {
    observer: web_sys_x::IntersectionObserver,
    _callback: IntersectionCallback,
}

impl ViewportObserver {
    /// Start observing `element`.
    ///
    /// `on_change` receives `true` when the element becomes visible (at least
    /// `threshold` of it) and `false` when it leaves. Fails when the browser
    /// has no `IntersectionObserver`.
    pub fn observe(
        element: &web_sys_x::Element,
        threshold: f64,
        once: bool,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let window = web_sys_x::window().ok_or("no window")?;
        if !js_sys_x::Reflect::has(&window, &"IntersectionObserver".into())? {
            return Err("IntersectionObserver not supported".into());
        }

        let callback: IntersectionCallback = Closure::wrap(Box::new(
            move |entries: js_sys_x::Array, observer: web_sys_x::IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys_x::IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());

                if visible && once {
                    observer.disconnect();
                }
                on_change(visible);
            },
        )
            as Box<dyn FnMut(js_sys_x::Array, web_sys_x::IntersectionObserver)>);

        let options = web_sys_x::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = web_sys_x::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
