//! Blog listing page
//!
//! Search text and the selected category live in this page's signals and the
//! post list is re-filtered on every keystroke or category click.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::app::use_site_meta;
use crate::core::format::{format_date, iso_date, truncate_text};
use crate::core::{BlogPost, PostQuery, all_posts, categories, filter_posts};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::footer::Footer;
use crate::ui::visibility::Reveal;

const EXCERPT_CHARS: usize = 160;

/// Blog listing page component
#[component]
pub fn BlogPage() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(None::<String>);

    let filtered = Memo::new(move |_| {
        let query = PostQuery {
            text: search.get(),
            category: category.get(),
        };
        filter_posts(all_posts(), &query)
    });

    let clear_filters = Callback::new(move |_| {
        set_search.set(String::new());
        set_category.set(None);
    });

    view! {
        <BlogSeoMeta />

        <section class="pt-32 pb-16 md:pt-40 md:pb-20 bg-gradient-to-b from-indigo-50 to-transparent">
            <div class="max-w-7xl mx-auto px-4 md:px-6 text-center hero-fade-in">
                <A href="/" attr:class="inline-flex items-center gap-2 text-sm text-slate-600 hover:text-indigo-600 mb-6 transition-colors">
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                    "Back to home"
                </A>
                <h1 class="text-3xl md:text-5xl font-bold text-slate-900 mb-6">"The Sampling Labs Blog"</h1>
                <p class="text-lg text-slate-600 max-w-2xl mx-auto mb-8">
                    "Insights, guides, and best practices to help you build exceptional AI-powered customer experiences."
                </p>

                <div class="flex flex-col sm:flex-row w-full max-w-xl mx-auto gap-4">
                    <label class="relative flex-grow">
                        <span class="sr-only">"Search articles"</span>
                        <input
                            type="search"
                            class="w-full h-11 rounded-lg border border-slate-200 bg-white pl-4 pr-10 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            placeholder="Search articles..."
                            prop:value=search
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                        <span class="absolute right-3 top-1/2 -translate-y-1/2">
                            <Icon name=icons::SEARCH class="w-4 h-4 opacity-50" />
                        </span>
                    </label>
                    <CategoryDropdown selected=category on_select=Callback::new(move |c| set_category.set(c)) />
                </div>
            </div>
        </section>

        <section class="py-12 md:py-16">
            <div class="max-w-7xl mx-auto px-4 md:px-6">
                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=move || view! { <EmptyState on_clear=clear_filters /> }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For
                            each=move || filtered.get()
                            key=|post| post.id
                            let:post
                        >
                            <Reveal>
                                <PostCard post=post />
                            </Reveal>
                        </For>
                    </div>
                </Show>
            </div>
        </section>

        <NewsletterSection />
        <Footer />
    }
}

#[component]
fn BlogSeoMeta() -> impl IntoView {
    let site = use_site_meta();
    let title = site.page_title("Blog");
    let description = "Discover the latest insights, guides, and best practices for AI-powered customer support and service automation.";

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />
        <Meta property="og:type" content="website" />
        <Link rel="canonical" href=site.canonical_url("/blog") />
    }
}

/// Category filter; `None` means every category
#[component]
fn CategoryDropdown(
    selected: ReadSignal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let choose = move |value: Option<String>| {
        on_select.run(value);
        set_open.set(false);
    };

    view! {
        <div class="relative">
            <button
                class="h-11 w-full sm:w-auto inline-flex items-center justify-between gap-2 rounded-lg border border-slate-200 bg-white px-4 text-sm"
                on:click=move |_| set_open.update(|v| *v = !*v)
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
            >
                {move || selected.get().unwrap_or_else(|| "All Categories".to_string())}
                <Icon name=icons::CHEVRON_DOWN class="w-4 h-4" />
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 z-20 mt-2 w-56 rounded-lg border border-slate-200 bg-white shadow-lg py-1" role="listbox">
                    <button
                        class="block w-full px-4 py-2 text-left text-sm hover:bg-slate-100"
                        class:font-medium=move || selected.with(Option::is_none)
                        on:click=move |_| choose(None)
                    >
                        "All Categories"
                    </button>
                    {categories(all_posts()).into_iter().map(|name| {
                        let is_selected = move || selected.with(|s| s.as_deref() == Some(name));
                        view! {
                            <button
                                class="block w-full px-4 py-2 text-left text-sm hover:bg-slate-100"
                                class:font-medium=is_selected
                                class:bg-slate-100=is_selected
                                on:click=move |_| choose(Some(name.to_string()))
                            >
                                {name}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn EmptyState(on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="w-16 h-16 mx-auto mb-4 rounded-full bg-slate-100 flex items-center justify-center">
                <Icon name=icons::SEARCH class="w-6 h-6 opacity-60" />
            </div>
            <h2 class="text-xl font-semibold text-slate-900 mb-2">"No articles found"</h2>
            <p class="text-slate-600 mb-6">"Try a different search term or category."</p>
            <button class="btn-secondary px-5 py-2" on:click=move |_| on_clear.run(())>
                "Clear filters"
            </button>
        </div>
    }
}

/// Post summary card used by the listing, the landing page and related posts
#[component]
pub fn PostCard(post: &'static BlogPost) -> impl IntoView {
    let path = post.path();

    view! {
        <article class="h-full flex flex-col bg-white rounded-xl border border-slate-200 overflow-hidden hover:shadow-lg transition-shadow duration-300">
            <A href=path.clone() attr:class="block overflow-hidden h-48">
                <img
                    src=post.cover_image_url.clone()
                    alt=post.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 hover:scale-105"
                />
            </A>
            <div class="p-6 flex flex-col flex-grow">
                <span class="w-fit px-3 py-1 mb-3 bg-indigo-50 rounded-full text-xs font-medium text-indigo-700">
                    {post.category.clone()}
                </span>
                <h2 class="text-xl font-bold text-slate-900 mb-3">
                    <A href=path.clone() attr:class="hover:underline">{post.title.clone()}</A>
                </h2>
                <p class="text-slate-600 mb-4 flex-grow">{truncate_text(&post.excerpt, EXCERPT_CHARS)}</p>
                <PostMeta post=post />
                <A href=path attr:class="mt-4 inline-flex items-center gap-1 text-sm font-medium text-indigo-600 hover:text-indigo-700">
                    "Read article"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                </A>
            </div>
        </article>
    }
}

/// Date, read time and author line
#[component]
pub fn PostMeta(post: &'static BlogPost) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-4 text-sm text-slate-500">
            <span class="inline-flex items-center gap-1">
                <Icon name=icons::CALENDAR class="w-4 h-4 opacity-60" />
                <time datetime=iso_date(post.published)>{format_date(post.published)}</time>
            </span>
            <span class="inline-flex items-center gap-1">
                <Icon name=icons::CLOCK class="w-4 h-4 opacity-60" />
                {format!("{} min read", post.read_time_minutes)}
            </span>
            <span>{post.author.clone()}</span>
        </div>
    }
}

/// Newsletter sign-up box; the address never leaves the page
#[component]
fn NewsletterSection() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (subscribed, set_subscribed) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.with(|e| e.contains('@')) {
            set_subscribed.set(true);
        }
    };

    view! {
        <section class="py-16 px-4 bg-slate-50">
            <Reveal class="max-w-2xl mx-auto text-center">
                <h2 class="text-2xl md:text-3xl font-bold text-slate-900 mb-3">"Subscribe to our newsletter"</h2>
                <p class="text-slate-600 mb-6">"Get the latest articles on AI-powered support delivered to your inbox."</p>
                <Show
                    when=move || !subscribed.get()
                    fallback=|| view! {
                        <p class="inline-flex items-center gap-2 text-emerald-700 font-medium">
                            <Icon name=icons::CHECK class="w-5 h-5" />
                            "Thanks for subscribing!"
                        </p>
                    }
                >
                    <form class="flex flex-col sm:flex-row gap-3 max-w-md mx-auto" on:submit=on_submit>
                        <input
                            type="email"
                            required
                            class="flex-grow h-11 rounded-lg border border-slate-200 bg-white px-4 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            placeholder="you@company.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn-primary h-11 px-6">"Subscribe"</button>
                    </form>
                </Show>
            </Reveal>
        </section>
    }
}
