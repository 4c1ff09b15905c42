//! Browser side of viewport visibility tracking
//!
//! [`use_visibility`] wires a [`VisibilityObserver`] to a real
//! `IntersectionObserver` and to a passive window scroll listener. Both are
//! released when the calling component unmounts.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{VisibilityOptions, VisibilityState};

#[cfg(not(feature = "ssr"))]
use crate::core::{IntersectionCallback, ObserverAction, ObserverPlatform, VisibilityObserver};
#[cfg(not(feature = "ssr"))]
use crate::ui::events::PassiveListener;
#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// `IntersectionObserver` watching a single element
#[cfg(not(feature = "ssr"))]
pub struct WebObserverPlatform {
    element: web_sys::Element,
}

/// Keeps the browser observer alive; disconnects on drop
#[cfg(not(feature = "ssr"))]
pub struct WebObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl Drop for WebObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(not(feature = "ssr"))]
impl ObserverPlatform for WebObserverPlatform {
    type Handle = Option<WebObserverHandle>;

    fn observe(
        &self,
        options: &VisibilityOptions,
        mut callback: IntersectionCallback,
    ) -> Self::Handle {
        let closure = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if callback(entry.is_intersecting()) == ObserverAction::Release {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        match web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => {
                observer.observe(&self.element);
                Some(WebObserverHandle {
                    observer,
                    _callback: closure,
                })
            }
            Err(err) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
                None
            }
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn measure(element: &web_sys::Element) -> (f64, f64, f64) {
    let rect = element.get_bounding_client_rect();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (rect.top(), rect.height(), viewport_height)
}

/// Track how `target` sits in the viewport while the calling component is mounted
pub fn use_visibility(target: NodeRef<Div>, options: VisibilityOptions) -> ReadSignal<VisibilityState> {
    let (state, set_state) = signal(VisibilityState::default());

    #[cfg(not(feature = "ssr"))]
    {
        let observer = StoredValue::new_local(None::<VisibilityObserver<WebObserverPlatform>>);
        let scroll = StoredValue::new_local(None::<PassiveListener>);
        on_cleanup(move || {
            observer.dispose();
            scroll.dispose();
        });

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if observer.try_with_value(Option::is_some).unwrap_or(true) {
                return;
            }
            let element: web_sys::Element = element.unchecked_into();

            let platform = WebObserverPlatform {
                element: element.clone(),
            };
            let attached = VisibilityObserver::attach(&platform, &options, move |next| {
                set_state.set(next)
            });

            let (top, height, viewport_height) = measure(&element);
            attached.record_scroll(top, height, viewport_height);
            observer.try_update_value(|slot| *slot = Some(attached));

            let window_target: web_sys::EventTarget = window().into();
            let listener = PassiveListener::new(&window_target, "scroll", move |_| {
                let (top, height, viewport_height) = measure(&element);
                observer.try_with_value(|slot| {
                    if let Some(attached) = slot {
                        attached.record_scroll(top, height, viewport_height);
                    }
                });
            });
            scroll.try_update_value(|slot| *slot = listener);
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, options, set_state);
    }

    state
}

/// Fade children in the first time they scroll into view
#[component]
pub fn Reveal(
    children: Children,
    /// Extra classes for the wrapper
    #[prop(default = "")]
    class: &'static str,
    /// Transition delay in milliseconds, for staggering siblings
    #[prop(default = 0)]
    delay_ms: u32,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visibility = use_visibility(
        node,
        VisibilityOptions::once().with_root_margin("0px 0px -50px 0px"),
    );

    view! {
        <div
            node_ref=node
            class=format!("reveal {}", class)
            class:visible=move || visibility.get().has_been_seen
            style:transition-delay=format!("{}ms", delay_ms)
        >
            {children()}
        </div>
    }
}
