//! Single blog post page
//!
//! The slug comes from the route. An unknown slug logs a warning and replaces
//! the current history entry with the blog listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Link, Meta, Title};
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_params_map;

use crate::app::use_site_meta;
use crate::core::format::{format_date, initials, iso_date};
use crate::core::seo::blog_posting_json_ld;
use crate::core::{
    BlogPost, ShareTarget, adjacent_posts, all_posts, related_posts, resolve_post_by_slug,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::blog::{PostCard, PostMeta};
use crate::ui::pages::footer::Footer;
use crate::ui::timers::use_timeout;
use crate::ui::visibility::Reveal;

const COPIED_RESET_MS: u32 = 2000;

/// Copy text to the system clipboard
#[cfg(not(feature = "ssr"))]
async fn copy_to_clipboard(text: String) -> Result<(), String> {
    use wasm_bindgen_futures::JsFuture;

    let clipboard = window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(&text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

#[cfg(feature = "ssr")]
async fn copy_to_clipboard(_text: String) -> Result<(), String> {
    Err("Not available on server".to_string())
}

/// Blog post page component
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.get().get("slug").unwrap_or_default());

    move || match resolve_post_by_slug(all_posts(), &slug.get()) {
        Ok(post) => view! { <PostArticle post=post /> }.into_any(),
        Err(err) => {
            leptos::logging::warn!("{}, redirecting to /blog", err);
            view! {
                <Redirect
                    path="/blog"
                    options=NavigateOptions {
                        replace: true,
                        ..Default::default()
                    }
                />
            }
            .into_any()
        }
    }
}

#[component]
fn PostArticle(post: &'static BlogPost) -> impl IntoView {
    let site = use_site_meta();
    let page_url = site.canonical_url(&post.path());
    let title = site.page_title(&post.title);
    let json_ld = blog_posting_json_ld(post, &site);

    let adjacent = adjacent_posts(all_posts(), post);
    let related = related_posts(all_posts(), post);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=post.excerpt.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=post.excerpt.clone() />
        <Meta property="og:type" content="article" />
        <Meta property="og:image" content=post.cover_image_url.clone() />
        <Meta property="og:url" content=page_url.clone() />
        <Meta property="article:published_time" content=iso_date(post.published) />
        <Meta name="twitter:card" content="summary_large_image" />
        <Link rel="canonical" href=page_url.clone() />
        <script type="application/ld+json" inner_html=json_ld></script>

        <article class="pt-28 pb-16 md:pt-36">
            <div class="max-w-3xl mx-auto px-4 md:px-6">
                <A href="/blog" attr:class="inline-flex items-center gap-2 text-sm text-slate-600 hover:text-indigo-600 mb-8 transition-colors">
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                    "Back to blog"
                </A>

                <header class="mb-8 hero-fade-in">
                    <span class="inline-block px-3 py-1 mb-4 bg-indigo-50 rounded-full text-xs font-medium text-indigo-700">
                        {post.category.clone()}
                    </span>
                    <h1 class="text-3xl md:text-5xl font-bold text-slate-900 mb-6 leading-tight">
                        {post.title.clone()}
                    </h1>
                    <PostMeta post=post />
                </header>

                <img
                    src=post.cover_image_url.clone()
                    alt=post.title.clone()
                    class="w-full h-64 md:h-96 object-cover rounded-2xl mb-10"
                />

                <div class="post-body" inner_html=post.body_html.clone()></div>

                <ShareBar page_url=page_url title=post.title.clone() />
                <AuthorBox post=post />
            </div>
        </article>

        <nav class="max-w-3xl mx-auto px-4 md:px-6 pb-16 grid grid-cols-1 sm:grid-cols-2 gap-4" aria-label="More posts">
            {adjacent.previous.map(|prev| view! {
                <A href=prev.path() attr:class="group glass-card p-5 block">
                    <span class="inline-flex items-center gap-1 text-xs text-slate-500 mb-1">
                        <Icon name=icons::ARROW_LEFT class="w-3 h-3" />
                        "Previous article"
                    </span>
                    <span class="block font-semibold text-slate-900 group-hover:text-indigo-600">{prev.title.clone()}</span>
                </A>
            })}
            {adjacent.next.map(|next| view! {
                <A href=next.path() attr:class="group glass-card p-5 block sm:col-start-2 text-right">
                    <span class="inline-flex items-center gap-1 text-xs text-slate-500 mb-1">
                        "Next article"
                        <Icon name=icons::ARROW_RIGHT class="w-3 h-3" />
                    </span>
                    <span class="block font-semibold text-slate-900 group-hover:text-indigo-600">{next.title.clone()}</span>
                </A>
            })}
        </nav>

        {(!related.is_empty()).then(move || view! {
            <section class="py-16 bg-slate-50">
                <div class="max-w-7xl mx-auto px-4 md:px-6">
                    <h2 class="text-2xl font-bold text-slate-900 mb-8">"Related articles"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {related.into_iter().enumerate().map(|(i, related_post)| view! {
                            <Reveal delay_ms={i as u32 * 100}>
                                <PostCard post=related_post />
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>
        })}

        <Footer />
    }
}

/// Share links plus a copy-to-clipboard button
#[component]
fn ShareBar(page_url: String, title: String) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let reset_copied = use_timeout(COPIED_RESET_MS, move || set_copied.set(false));

    let links = ShareTarget::ALL
        .into_iter()
        .map(|target| {
            let href = target.share_url(&page_url, &title);
            view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn-secondary px-4 py-2 text-sm"
                    aria-label=format!("Share on {}", target)
                >
                    {target.to_string()}
                </a>
            }
        })
        .collect_view();

    let url = page_url;
    let on_copy = move |_| {
        let url = url.clone();
        spawn_local(async move {
            match copy_to_clipboard(url).await {
                Ok(()) => {
                    set_copied.set(true);
                    reset_copied.run(());
                }
                Err(e) => leptos::logging::warn!("Failed to copy link: {}", e),
            }
        });
    };

    view! {
        <div class="mt-12 pt-8 border-t border-slate-200 flex flex-wrap items-center gap-3">
            <span class="text-sm font-medium text-slate-700 mr-2">"Share this article"</span>
            {links}
            <button class="btn-secondary px-4 py-2 text-sm inline-flex items-center gap-2" on:click=on_copy>
                <Show
                    when=move || copied.get()
                    fallback=|| view! { <Icon name=icons::LINK class="w-4 h-4" /> "Copy link" }
                >
                    <Icon name=icons::CHECK class="w-4 h-4" />
                    "Copied!"
                </Show>
            </button>
        </div>
    }
}

#[component]
fn AuthorBox(post: &'static BlogPost) -> impl IntoView {
    view! {
        <div class="mt-10 p-6 rounded-2xl bg-slate-50 flex items-center gap-4">
            <div class="w-14 h-14 shrink-0 rounded-full bg-gradient-to-br from-indigo-500 to-violet-500 text-white font-semibold flex items-center justify-center">
                {initials(&post.author)}
            </div>
            <div>
                <p class="font-semibold text-slate-900">{post.author.clone()}</p>
                <p class="text-sm text-slate-600">
                    {format!("Writes about {} at Sampling Labs. Published {}.", post.category, format_date(post.published))}
                </p>
            </div>
        </div>
    }
}
