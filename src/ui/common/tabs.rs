use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabItem {
    /// Unique identifier, also used for the panel element id
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
}

impl TabItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Position of `active` among `tabs`, falling back to the first tab
pub fn active_index(tabs: &[TabItem], active: &str) -> usize {
    tabs.iter().position(|t| t.id == active).unwrap_or(0)
}

/// Tab list with an indicator that slides under the active tab
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    active_tab: ReadSignal<&'static str>,
    /// Callback when tab is changed
    on_change: Callback<&'static str>,
) -> impl IntoView {
    let count = tabs.len().max(1);
    let indicator_tabs = tabs.clone();
    let indicator_style = move || {
        let index = active_index(&indicator_tabs, active_tab.get());
        format!(
            "width: {:.4}%; transform: translateX({}%);",
            100.0 / count as f64,
            index * 100
        )
    };

    view! {
        <div class="relative flex rounded-xl bg-slate-100 p-1" role="tablist">
            <div
                class="absolute top-1 bottom-1 left-1 rounded-lg bg-white shadow transition-transform duration-300 ease-out"
                style=indicator_style
                aria-hidden="true"
            ></div>
            {tabs.into_iter().map(|tab| {
                let is_active = move || active_tab.get() == tab.id;
                view! {
                    <button
                        class="relative z-10 flex-1 px-4 py-2 text-sm font-medium transition-colors"
                        class:text-slate-900=is_active
                        class:text-slate-500=move || !is_active()
                        on:click=move |_| on_change.run(tab.id)
                        role="tab"
                        aria-selected=move || is_active().to_string()
                        aria-controls=format!("panel-{}", tab.id)
                    >
                        {tab.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Tab panel content component; fades in when its tab becomes active
#[component]
pub fn TabPanel(
    /// Tab ID this panel belongs to
    tab_id: &'static str,
    /// Currently active tab ID
    active_tab: ReadSignal<&'static str>,
    /// Panel content
    children: Children,
) -> impl IntoView {
    let is_active = move || active_tab.get() == tab_id;

    view! {
        <div
            class="tab-panel"
            class:tab-panel-active=is_active
            role="tabpanel"
            id=format!("panel-{}", tab_id)
            style:display=move || if is_active() { "block" } else { "none" }
            aria-hidden=move || (!is_active()).to_string()
        >
            {children()}
        </div>
    }
}
