use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_site_meta;
use crate::core::format::current_copyright;
use crate::ui::navbar::Logo;

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site_meta();

    view! {
        <footer class="py-12 border-t border-slate-200 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-slate-900">"Sampling Labs"</span>
                        </div>
                        <p class="text-sm text-slate-600 max-w-md">
                            "AI agents that answer your customers instantly and know when to bring in a human."
                        </p>
                    </div>

                    // Product links
                    <div>
                        <h4 class="font-semibold text-slate-900 mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            <li><a href="/#features" class="footer-link">"Features"</a></li>
                            <li><a href="/#pricing" class="footer-link">"Pricing"</a></li>
                            <li><a href="/#testimonials" class="footer-link">"Customers"</a></li>
                        </ul>
                    </div>

                    // Resources
                    <div>
                        <h4 class="font-semibold text-slate-900 mb-4">"Resources"</h4>
                        <ul class="space-y-2">
                            <li><A href="/blog" attr:class="footer-link">"Blog"</A></li>
                            <li><a href="mailto:contact@samplinglabs.com" class="footer-link">"Contact"</a></li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-slate-200/60 text-sm text-slate-500">
                    {format!("{}. All rights reserved.", current_copyright(&site.site_name))}
                </div>
            </div>
        </footer>
    }
}
