//! 404 page for unknown routes

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::app::use_site_meta;
use crate::core::format::current_copyright;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let site = use_site_meta();

    view! {
        <Title text=site.page_title("Page Not Found") />
        <Meta name="robots" content="noindex" />

        <div class="min-h-screen flex flex-col items-center justify-center p-4 bg-gradient-to-b from-indigo-50 to-white">
            <div class="text-center hero-fade-in">
                <div class="w-24 h-24 mx-auto mb-6 bg-white shadow-sm rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12 opacity-60" />
                </div>

                <h1 class="text-6xl font-bold gradient-text mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-slate-900 mb-2">"Page Not Found"</h2>
                <p class="text-slate-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-primary px-6 py-3">
                        "Go Home"
                    </A>
                    <A href="/blog" attr:class="btn-secondary px-6 py-3">
                        "Read the blog"
                    </A>
                </div>
            </div>

            <p class="absolute bottom-8 text-sm text-slate-500">
                {current_copyright(&site.site_name)}
            </p>
        </div>
    }
}
