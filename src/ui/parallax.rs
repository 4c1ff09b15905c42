use leptos::html::Div;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::motion::{PARALLAX_INTENSITY, parallax_offset, scroll_parallax_shift};
#[cfg(not(feature = "ssr"))]
use crate::ui::events::PassiveListener;
use crate::ui::events::use_window_scroll;

/// Pixel offset that follows the pointer while it hovers `container`.
///
/// Layers multiply the offset by their own depth; the offset snaps back to
/// zero when the pointer leaves.
pub fn use_hover_parallax(container: NodeRef<Div>) -> ReadSignal<(f64, f64)> {
    let (offset, set_offset) = signal((0.0, 0.0));

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsCast;

        let listeners = StoredValue::new_local(Vec::<PassiveListener>::new());
        on_cleanup(move || listeners.dispose());

        Effect::new(move |_| {
            let Some(element) = container.get() else {
                return;
            };
            if listeners.try_with_value(|l| !l.is_empty()).unwrap_or(true) {
                return;
            }
            let element: web_sys::Element = element.unchecked_into();
            let target: web_sys::EventTarget = element.clone().into();

            let on_move = PassiveListener::new(&target, "mousemove", move |ev| {
                let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                set_offset.set(parallax_offset(
                    (ev.client_x() as f64, ev.client_y() as f64),
                    (rect.left(), rect.top()),
                    (rect.width(), rect.height()),
                    PARALLAX_INTENSITY,
                    1.0,
                ));
            });
            let on_leave = PassiveListener::new(&target, "mouseleave", move |_| {
                set_offset.set((0.0, 0.0));
            });

            listeners.try_update_value(|l| l.extend(on_move.into_iter().chain(on_leave)));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (container, set_offset);
    }

    offset
}

/// CSS transform for a layer moving at `depth` times the pointer offset
pub fn parallax_transform(offset: (f64, f64), depth: f64) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0)",
        offset.0 * depth,
        offset.1 * depth
    )
}

/// Section whose background and content drift at their own speed while the
/// page scrolls past it
#[component]
pub fn ParallaxSection(
    children: Children,
    /// Background shift per scrolled pixel
    #[prop(default = 0.5)]
    background_speed: f64,
    /// Content shift per scrolled pixel
    #[prop(default = 0.8)]
    content_speed: f64,
    #[prop(default = "")] class: &'static str,
    #[prop(default = "")] background_class: &'static str,
) -> impl IntoView {
    let section = NodeRef::<Div>::new();
    let (shift, set_shift) = signal((0.0, 0.0));

    use_window_scroll(move |scroll_y| {
        #[cfg(not(feature = "ssr"))]
        {
            let Some(element) = section.get_untracked() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let viewport_height = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let measure = |speed| {
                scroll_parallax_shift(
                    scroll_y,
                    rect.top() + scroll_y,
                    rect.height(),
                    viewport_height,
                    speed,
                )
            };
            if let (Some(background), Some(content)) =
                (measure(background_speed), measure(content_speed))
            {
                set_shift.set((background, content));
            }
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (scroll_y, section, set_shift, background_speed, content_speed);
        }
    });

    let translate = |y: f64| format!("translate3d(0, {:.2}px, 0)", y);

    view! {
        <div node_ref=section class=format!("relative overflow-hidden {}", class)>
            <div
                class=format!("absolute inset-0 z-0 {}", background_class)
                style:transform=move || translate(shift.get().0)
                aria-hidden="true"
            ></div>
            <div class="relative z-10" style:transform=move || translate(shift.get().1)>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_transform() {
        assert_eq!(parallax_transform((0.0, 0.0), 2.0), "translate3d(0.00px, 0.00px, 0)");
        assert_eq!(parallax_transform((2.5, -1.0), 2.0), "translate3d(5.00px, -2.00px, 0)");
    }
}
