use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SiteMeta;
use crate::ui::pages::{BlogPage, BlogPostPage, IndexPage, NotFoundPage};
use crate::ui::Navbar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Site metadata provided by the server, or relative-URL defaults in the browser
pub fn use_site_meta() -> SiteMeta {
    use_context::<SiteMeta>().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site = use_site_meta();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/sampling-labs.css"/>
        <Link rel="preconnect" href="https://images.unsplash.com"/>
        <Meta name="theme-color" content="#4f46e5"/>

        // sets the document title; pages override it
        <Title text=site.site_name.clone()/>

        <Router>
            <Navbar/>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=IndexPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/blog/:slug") view=BlogPostPage/>
                </Routes>
            </main>
        </Router>
    }
}
