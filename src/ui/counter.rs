use leptos::html::Div;
use leptos::prelude::*;

use crate::core::VisibilityOptions;
use crate::core::format::format_number;
use crate::core::motion::SmoothCounter;
use crate::ui::timers::use_animation;
use crate::ui::visibility::use_visibility;

/// Number that counts up to its target the first time it scrolls into view
#[component]
pub fn CountUp(
    counter: SmoothCounter,
    #[prop(default = "")] prefix: &'static str,
    #[prop(default = "")] suffix: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visibility = use_visibility(node, VisibilityOptions::once());
    let (value, set_value) = signal(counter.value_at(0.0));

    let started = Signal::derive(move || visibility.get().has_been_seen);
    use_animation(started, move |elapsed| {
        set_value.set(counter.value_at(elapsed));
        !counter.is_finished(elapsed)
    });

    let text = move || {
        let v = value.get();
        if counter.decimals == 0 {
            format_number(v.max(0.0).round() as u64)
        } else {
            format!("{:.*}", counter.decimals as usize, v)
        }
    };

    view! {
        <div node_ref=node class=format!("inline-block {}", class)>
            {prefix}{text}{suffix}
        </div>
    }
}
