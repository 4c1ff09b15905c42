//! Passive DOM listeners scoped to the owning component

#[cfg(not(feature = "ssr"))]
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsCast, closure::Closure};

/// A registered `passive: true` listener, removed again on drop
#[cfg(not(feature = "ssr"))]
pub struct PassiveListener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(not(feature = "ssr"))]
impl PassiveListener {
    pub fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);

        if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            leptos::logging::warn!("failed to add {} listener: {:?}", event, err);
            return None;
        }

        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for PassiveListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Current vertical scroll offset of the window
pub fn window_scroll_y() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        window().scroll_y().unwrap_or(0.0)
    }

    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Run `handler` with the scroll offset on every window scroll until unmount
pub fn use_window_scroll(mut handler: impl FnMut(f64) + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        let target: web_sys::EventTarget = window().into();
        let listener = PassiveListener::new(&target, "scroll", move |_| {
            handler(window_scroll_y());
        });
        let listener = StoredValue::new_local(listener);
        on_cleanup(move || listener.dispose());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = &mut handler;
    }
}
