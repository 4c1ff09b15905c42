//! Site-wide navigation bar
//!
//! Hides itself while the reader scrolls down, comes back on scroll up, and
//! shows a scroll-to-top button once the page is scrolled far enough.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::motion::HeaderVisibility;
use crate::ui::events::use_window_scroll;
use crate::ui::icon::{Icon, icons};

const NAV_LINKS: [(&str, &str); 5] = [
    ("Features", "/#features"),
    ("Dashboard", "/#dashboard"),
    ("Testimonials", "/#testimonials"),
    ("Pricing", "/#pricing"),
    ("Blog", "/blog"),
];

/// Header component with mobile menu support
#[component]
pub fn Navbar() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (chrome, set_chrome) = signal(HeaderVisibility::new());

    use_window_scroll(move |y| set_chrome.update(|c| c.on_scroll(y)));

    view! {
        <header class=move || {
            let hidden = !chrome.get().header_visible && !mobile_menu_open.get();
            format!(
                "fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-slate-200/60 transition-transform duration-300 {}",
                if hidden { "-translate-y-full" } else { "translate-y-0" },
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-slate-900">"Sampling Labs"</span>
                    </A>

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS.into_iter().map(|(label, href)| view! {
                            <a href=href class="text-sm font-medium text-slate-600 hover:text-slate-900 transition-colors">
                                {label}
                            </a>
                        }).collect_view()}
                        <a href="/#cta" class="btn-primary text-sm">"Get Started"</a>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-slate-100 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-slate-200/60">
                        {NAV_LINKS.into_iter().map(|(label, href)| view! {
                            <a
                                href=href
                                class="block px-4 py-2 text-sm font-medium text-slate-600 hover:text-slate-900 hover:bg-slate-100 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {label}
                            </a>
                        }).collect_view()}
                    </nav>
                </div>
            </div>
        </header>

        <ScrollToTopButton visible=Signal::derive(move || chrome.get().show_scroll_top) />
    }
}

#[component]
fn ScrollToTopButton(visible: Signal<bool>) -> impl IntoView {
    let scroll_to_top = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <button
            class="fixed bottom-6 right-6 z-40 w-11 h-11 rounded-full bg-indigo-600 text-white shadow-lg flex items-center justify-center transition-all duration-300"
            class:opacity-0=move || !visible.get()
            class:pointer-events-none=move || !visible.get()
            on:click=scroll_to_top
            aria-label="Scroll to top"
        >
            <Icon name=icons::ARROW_UP class="w-5 h-5 invert" />
        </button>
    }
}

/// Logo component
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-indigo-600 to-violet-500 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M8 10h.01M12 10h.01M16 10h.01M21 12c0 4.418-4.03 8-9 8a9.86 9.86 0 01-4-.8L3 20l1.3-3.9A7.96 7.96 0 013 12c0-4.418 4.03-8 9-8s9 3.582 9 8z" />
            </svg>
        </div>
    }
}
