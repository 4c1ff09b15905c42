//! Landing page component
//!
//! The marketing page for Sampling Labs:
//! - SEO meta tags and Organization structured data
//! - Hero with a typing chat preview and live support metrics
//! - Features, analytics dashboard and testimonials
//! - Pricing with a monthly/annual switch
//! - Latest blog posts, call-to-action and footer

use leptos::html::Div;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::app::use_site_meta;
use crate::core::dashboard::{
    CONVERSATION_TYPES, PERFORMANCE, REGIONS, RESPONSE_TIME, SATISFACTION, WEEKLY_ACTIVITY,
};
use crate::core::format::{format_number, initials};
use crate::core::latest_posts;
use crate::core::motion::{DashboardKpis, HeroMetrics, SmoothCounter, TYPE_INTERVAL_MS, Typewriter};
use crate::core::seo::organization_json_ld;
use crate::ui::chart::{BarChart, ShareBars};
use crate::ui::common::{TabItem, TabPanel, Tabs};
use crate::ui::counter::CountUp;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::blog::PostCard;
use crate::ui::pages::footer::Footer;
use crate::ui::parallax::{ParallaxSection, parallax_transform, use_hover_parallax};
use crate::ui::timers::{random_samples, use_interval};
use crate::ui::visibility::Reveal;

const CHAT_PHRASES: [&str; 4] = [
    "I'd like to upgrade my plan",
    "How do I connect to my CRM?",
    "Can you help with API integration?",
    "What's the pricing for Enterprise?",
];

/// Landing page component
#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="overflow-x-hidden">
            <ParallaxSection
                background_speed=0.05
                content_speed={-0.02}
                background_class="bg-gradient-to-b from-indigo-50/60 to-transparent"
            >
                <HeroSection />
            </ParallaxSection>
            <FeaturesSection />
            <DashboardSection />
            <TestimonialsSection />
            <PricingSection />
            <BlogTeaser />
            <ParallaxSection background_speed=0.03 content_speed={-0.01}>
                <CtaSection />
            </ParallaxSection>
            <Footer />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let site = use_site_meta();
    let title = site.page_title("AI Agents for Customer Support");
    let description = "AI agents that resolve customer conversations instantly, hand off to your team when it matters, and learn from every interaction.";
    let canonical = site.canonical_url("/");

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=description />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=description />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=organization_json_ld(&site)></script>
    }
}

/// Hero with the chat preview and live metrics widget
#[component]
fn HeroSection() -> impl IntoView {
    let (typewriter, set_typewriter) = signal(Typewriter::new(CHAT_PHRASES));
    use_interval(TYPE_INTERVAL_MS, move || {
        set_typewriter.maybe_update(|t| t.advance(TYPE_INTERVAL_MS));
    });

    let (metrics, set_metrics) = signal(HeroMetrics::default());
    use_interval(HeroMetrics::TICK_MS, move || {
        set_metrics.update(|m| *m = m.step(random_samples()));
    });

    let mockup = NodeRef::<Div>::new();
    let offset = use_hover_parallax(mockup);

    view! {
        <section class="relative pt-32 pb-16 md:pt-40 md:pb-24 overflow-hidden">
            <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                <div class="absolute top-0 right-0 w-1/3 h-80 bg-gradient-to-l from-indigo-500/10 to-transparent rounded-full blur-3xl"></div>
                <div class="absolute top-40 -left-20 w-80 h-80 bg-gradient-to-r from-pink-500/10 to-transparent rounded-full blur-3xl"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 md:px-6 grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                <div class="flex flex-col gap-6 hero-fade-in">
                    <span class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-slate-100 text-sm font-medium text-slate-800 w-fit">
                        <span class="flex h-2 w-2 rounded-full bg-indigo-600"></span>
                        "Now with GPT-class reasoning"
                    </span>
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight leading-tight">
                        "AI Agents for"
                        <span class="block mt-2 gradient-text">"magical customer"</span>
                        <span class="block mt-2">"experiences"</span>
                    </h1>
                    <p class="text-lg text-slate-600 max-w-md">
                        "Resolve most conversations instantly, hand the rest to your team with full context, and learn from every reply."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 pt-2">
                        <a href="#cta" class="btn-primary h-12 px-6 inline-flex items-center justify-center gap-1 group">
                            "Start for free"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4 invert transition-transform group-hover:translate-x-1" />
                        </a>
                        <a href="#dashboard" class="btn-secondary h-12 px-6 inline-flex items-center justify-center">
                            "See it in action"
                        </a>
                    </div>
                    <p class="text-sm text-slate-500 flex items-center gap-2">
                        <Icon name=icons::CHECK class="w-4 h-4" />
                        "No credit card required"
                    </p>
                </div>

                <div node_ref=mockup class="relative">
                    <div
                        class="glass-card rounded-2xl p-6 shadow-xl transition-transform duration-200 ease-out"
                        style:transform=move || parallax_transform(offset.get(), 1.0)
                    >
                        <div class="flex items-center gap-3 mb-4">
                            <div class="w-10 h-10 rounded-full bg-indigo-600 flex items-center justify-center">
                                <Icon name=icons::CHAT class="w-5 h-5 invert" />
                            </div>
                            <div>
                                <div class="font-semibold text-slate-900">"Support Agent"</div>
                                <div class="text-xs text-emerald-600">"Online"</div>
                            </div>
                        </div>
                        <div class="space-y-3 min-h-[96px]">
                            <div class="ml-auto w-fit max-w-[80%] rounded-2xl rounded-tr-sm bg-indigo-600 px-4 py-2 text-sm text-white">
                                {move || typewriter.with(Typewriter::text)}
                                <span
                                    class="typing-caret"
                                    class:hidden=move || !typewriter.with(Typewriter::is_typing)
                                >"|"</span>
                            </div>
                            <div class="w-fit max-w-[80%] rounded-2xl rounded-tl-sm bg-slate-100 px-4 py-2 text-sm text-slate-700">
                                "Happy to help! Let me pull up your account."
                            </div>
                        </div>
                    </div>

                    <div
                        class="absolute -bottom-8 -left-6 glass-card rounded-xl p-4 shadow-lg grid grid-cols-2 gap-4 w-64 transition-transform duration-200 ease-out"
                        style:transform=move || parallax_transform(offset.get(), -1.5)
                    >
                        <LiveMetric label="Satisfaction" value=Signal::derive(move || format!("{}%", metrics.get().satisfaction)) />
                        <LiveMetric label="Avg. response" value=Signal::derive(move || format!("{}s", metrics.get().response_time_secs)) />
                        <LiveMetric label="Resolution" value=Signal::derive(move || format!("{}%", metrics.get().resolution)) />
                        <LiveMetric label="Active chats" value=Signal::derive(move || metrics.get().active_chats.to_string()) />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn LiveMetric(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div>
            <div class="text-xs text-slate-500">{label}</div>
            <div class="text-lg font-semibold text-slate-900 tabular-nums">{value}</div>
        </div>
    }
}

/// Features section component
#[component]
fn FeaturesSection() -> impl IntoView {
    let features = [
        (icons::SPARKLES, "Purpose-built for LLMs", "Language models with reasoning capabilities for effective responses to complex queries."),
        (icons::LIGHTNING, "Designed for simplicity", "Create, manage, and deploy AI Agents easily, even without technical skills."),
        (icons::SHIELD, "Engineered for security", "Enjoy peace of mind with robust encryption and strict compliance standards."),
        (icons::USERS, "Human hand-off", "Escalate to your team with the full conversation and a suggested answer attached."),
        (icons::GLOBE, "Every channel", "One agent for your website, email, WhatsApp and in-app chat."),
        (icons::CLOCK, "Always on", "Answers in seconds at any hour, with no queue and no overtime."),
    ];

    view! {
        <section id="features" class="py-20 px-4 bg-slate-50">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 mb-4">
                        "Everything your support team needs"
                    </h2>
                    <p class="text-lg text-slate-600 max-w-2xl mx-auto">
                        "One platform to automate answers, route the hard cases and measure what matters."
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8">
                    {features.into_iter().enumerate().map(|(i, (icon, title, description))| view! {
                        <Reveal delay_ms={(i as u32 % 3) * 100}>
                            <FeatureCard icon=icon title=title description=description />
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="h-full bg-white p-6 rounded-xl border border-slate-200 hover:border-indigo-300
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-indigo-50 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-slate-900 mb-2">{title}</h3>
            <p class="text-slate-600 text-sm leading-relaxed">{description}</p>
        </div>
    }
}

const DASHBOARD_TABS: [TabItem; 3] = [
    TabItem::new("overview", "Overview"),
    TabItem::new("conversations", "Conversations"),
    TabItem::new("performance", "Performance"),
];

/// Analytics dashboard with live KPIs
#[component]
fn DashboardSection() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(DASHBOARD_TABS[0].id);
    let (kpis, set_kpis) = signal(DashboardKpis::default());
    use_interval(DashboardKpis::TICK_MS, move || {
        set_kpis.update(|k| *k = k.step(random_samples()));
    });

    view! {
        <section id="dashboard" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 mb-4">
                        "See the impact in real time"
                    </h2>
                    <p class="text-lg text-slate-600 max-w-2xl mx-auto">
                        "Track resolution, response times and satisfaction as your agent learns."
                    </p>
                </Reveal>

                <Reveal class="glass-card rounded-2xl p-6 shadow-xl">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                        <KpiTile label="Success rate" value=Signal::derive(move || format!("{:.1}%", kpis.get().success_rate)) />
                        <KpiTile label="Avg. response" value=Signal::derive(move || format!("{:.1}s", kpis.get().avg_response_secs)) />
                        <KpiTile label="Active conversations" value=Signal::derive(move || kpis.get().active_conversations.to_string()) />
                        <KpiTile label="Satisfaction" value=Signal::derive(move || format!("{:.1}/5", kpis.get().satisfaction_score)) />
                    </div>

                    <Tabs
                        tabs=DASHBOARD_TABS.to_vec()
                        active_tab=active_tab
                        on_change=Callback::new(move |id| set_active_tab.set(id))
                    />

                    <div class="mt-6">
                        <TabPanel tab_id="overview" active_tab=active_tab>
                            <div class="grid md:grid-cols-2 gap-8">
                                <ChartCard title="Resolution rate">
                                    <BarChart points=&PERFORMANCE label="This year" previous_label="Last year" />
                                </ChartCard>
                                <ChartCard title="Weekly conversations">
                                    <BarChart points=&WEEKLY_ACTIVITY label="Conversations" />
                                </ChartCard>
                            </div>
                        </TabPanel>
                        <TabPanel tab_id="conversations" active_tab=active_tab>
                            <div class="grid md:grid-cols-2 gap-8">
                                <ChartCard title="Conversation types">
                                    <ShareBars points=&CONVERSATION_TYPES />
                                </ChartCard>
                                <ChartCard title="Conversations by region">
                                    <ShareBars points=&REGIONS />
                                </ChartCard>
                            </div>
                        </TabPanel>
                        <TabPanel tab_id="performance" active_tab=active_tab>
                            <div class="grid md:grid-cols-2 gap-8">
                                <ChartCard title="First response (seconds)">
                                    <BarChart points=&RESPONSE_TIME label="Human team" previous_label="AI agent" />
                                </ChartCard>
                                <ChartCard title="Customer satisfaction">
                                    <BarChart points=&SATISFACTION label="Average rating" />
                                </ChartCard>
                            </div>
                        </TabPanel>
                    </div>

                    <div class="grid grid-cols-2 gap-4 mt-8 pt-6 border-t border-slate-200">
                        <div>
                            <div class="text-xs text-slate-500">"Total users"</div>
                            <div class="text-2xl font-bold text-slate-900 tabular-nums">
                                {move || format_number(kpis.get().total_users)}
                            </div>
                        </div>
                        <div>
                            <div class="text-xs text-slate-500">"Resolved issues"</div>
                            <div class="text-2xl font-bold text-slate-900 tabular-nums">
                                {move || format_number(kpis.get().resolved_issues)}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn KpiTile(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-white border border-slate-200 p-4">
            <div class="text-xs text-slate-500 mb-1">{label}</div>
            <div class="text-2xl font-bold text-slate-900 tabular-nums">{value}</div>
        </div>
    }
}

#[component]
fn ChartCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-white border border-slate-200 p-4">
            <h3 class="text-sm font-semibold text-slate-700 mb-4">{title}</h3>
            {children()}
        </div>
    }
}

const TESTIMONIALS: [(&str, &str, &str, &str); 6] = [
    (
        "Sampling Labs is a strong signal of how customer support will evolve. It is an early adopter of the agentic approach, which will become increasingly effective, trusted, and prominent.",
        "Marc Manara",
        "Chief Product Officer",
        "OpenAI",
    ),
    (
        "I want to express how impressed we are with the talent behind such an excellent product like Sampling Labs. We at Zain Cash truly appreciate and enjoy using your platform.",
        "Yazen Altimimi",
        "Head of Technology",
        "Zain Cash",
    ),
    (
        "Our chatbot has been great. Answers questions it knows, delegates to our talent when its stuck, knows how to push clients to the funnel. Sampling Labs is what we use, 10/10 recommend.",
        "Martin Terskin",
        "CTO",
        "OfferMarket",
    ),
    (
        "The integration of Sampling Labs into our support workflow has transformed our customer service operations. The adaptive learning capabilities are impressive.",
        "Jessica Wong",
        "Director of Customer Experience",
        "Adobe",
    ),
    (
        "After evaluating several AI support platforms, Sampling Labs stood out for its balance of automation and human oversight. Our ROI has been substantial.",
        "Robert Chen",
        "Head of Support Operations",
        "Shopify",
    ),
    (
        "The ability to customize AI responses while maintaining our brand voice has made Sampling Labs an invaluable asset to our customer engagement strategy.",
        "Emma Collins",
        "Customer Engagement Lead",
        "Stripe",
    ),
];

/// Testimonials section component
#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-20 px-4 bg-slate-50">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 mb-4">
                        "Loved by support teams"
                    </h2>
                    <div class="flex items-center justify-center gap-8 text-slate-600">
                        <div>
                            <CountUp counter=SmoothCounter::new(2800.0) suffix="+" class="text-3xl font-bold text-slate-900" />
                            <div class="text-sm">"Reviews"</div>
                        </div>
                        <div>
                            <CountUp counter=SmoothCounter::new(4.9).with_decimals(1) suffix="/5" class="text-3xl font-bold text-slate-900" />
                            <div class="text-sm">"Average rating"</div>
                        </div>
                    </div>
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {TESTIMONIALS.into_iter().enumerate().map(|(i, (quote, author, position, company))| view! {
                        <Reveal delay_ms={(i as u32 % 3) * 100}>
                            <figure class="h-full bg-white rounded-xl border border-slate-200 p-6 flex flex-col">
                                <blockquote class="text-slate-700 leading-relaxed flex-1">{quote}</blockquote>
                                <figcaption class="flex items-center gap-3 mt-6">
                                    <span class="w-10 h-10 rounded-full bg-indigo-100 text-indigo-700 font-semibold flex items-center justify-center">
                                        {initials(author)}
                                    </span>
                                    <span>
                                        <span class="block font-semibold text-slate-900">{author}</span>
                                        <span class="block text-sm text-slate-500">{format!("{}, {}", position, company)}</span>
                                    </span>
                                </figcaption>
                            </figure>
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Billing period selected in the pricing switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BillingCycle {
    Monthly,
    Annual,
}

struct Plan {
    name: &'static str,
    description: &'static str,
    monthly_price: &'static str,
    annual_price: &'static str,
    features: &'static [&'static str],
    featured: bool,
    cta: &'static str,
}

impl Plan {
    fn price(&self, cycle: BillingCycle) -> (&'static str, Option<&'static str>) {
        match (cycle, self.monthly_price) {
            (_, "Custom") => ("Custom", None),
            (BillingCycle::Monthly, price) => (price, Some("/month")),
            (BillingCycle::Annual, _) => (self.annual_price, Some("/year")),
        }
    }
}

static PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        description: "Perfect for small businesses and startups",
        monthly_price: "$29",
        annual_price: "$290",
        features: &[
            "1,000 AI messages per month",
            "Basic analytics",
            "Web widget integration",
            "Email support",
            "1 team member",
        ],
        featured: false,
        cta: "Start free trial",
    },
    Plan {
        name: "Professional",
        description: "Ideal for growing businesses with advanced needs",
        monthly_price: "$99",
        annual_price: "$990",
        features: &[
            "10,000 AI messages per month",
            "Advanced analytics",
            "All integrations",
            "Priority support",
            "Unlimited team members",
            "Custom branding",
            "Advanced guardrails",
        ],
        featured: true,
        cta: "Start free trial",
    },
    Plan {
        name: "Enterprise",
        description: "Custom solutions for large organizations",
        monthly_price: "Custom",
        annual_price: "Custom",
        features: &[
            "Unlimited AI messages",
            "Enterprise analytics",
            "Custom integrations",
            "Dedicated support",
            "SLA guarantees",
            "Single sign-on (SSO)",
            "Advanced security features",
        ],
        featured: false,
        cta: "Contact sales",
    },
];

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    let (cycle, set_cycle) = signal(BillingCycle::Monthly);
    let toggle = move |_| {
        set_cycle.update(|c| {
            *c = match c {
                BillingCycle::Monthly => BillingCycle::Annual,
                BillingCycle::Annual => BillingCycle::Monthly,
            }
        })
    };
    let annual = move || cycle.get() == BillingCycle::Annual;

    view! {
        <section id="pricing" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 mb-4">
                        "Simple, transparent pricing"
                    </h2>
                    <p class="text-lg text-slate-600 mb-8">
                        "Start free, then pick the plan that fits your volume."
                    </p>
                    <div class="flex items-center justify-center gap-3">
                        <span class:text-slate-400=annual>"Monthly"</span>
                        <button
                            class="relative w-14 h-7 bg-slate-200 rounded-full"
                            on:click=toggle
                            role="switch"
                            aria-checked=move || annual().to_string()
                            aria-label="Toggle annual billing"
                        >
                            <span
                                class="absolute top-1 left-0 w-5 h-5 rounded-full bg-indigo-600 transition-transform duration-300"
                                class:translate-x-8=annual
                                class:translate-x-1=move || !annual()
                            ></span>
                        </button>
                        <span class="flex flex-col items-start" class:text-slate-400=move || !annual()>
                            "Annual"
                            <span class="text-xs text-pink-600 font-medium">"Save 20%"</span>
                        </span>
                    </div>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8">
                    {PLANS.iter().map(|plan| view! { <PricingCard plan=plan cycle=cycle /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(plan: &'static Plan, cycle: ReadSignal<BillingCycle>) -> impl IntoView {
    let card_class = if plan.featured {
        "relative h-full bg-white p-8 rounded-2xl border-2 border-indigo-600 shadow-xl md:scale-105"
    } else {
        "h-full bg-white p-8 rounded-2xl border border-slate-200 hover:border-slate-300 transition-colors"
    };

    view! {
        <Reveal>
            <div class=card_class>
                {plan.featured.then(|| view! {
                    <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-indigo-600 text-white text-sm font-medium rounded-full">
                        "Most Popular"
                    </div>
                })}

                <h3 class="text-2xl font-bold text-slate-900 mb-2">{plan.name}</h3>
                <p class="text-sm text-slate-600 mb-6">{plan.description}</p>
                <div class="flex items-baseline gap-1 mb-6">
                    <span class="text-4xl font-bold text-slate-900">{move || plan.price(cycle.get()).0}</span>
                    <span class="text-slate-500">{move || plan.price(cycle.get()).1}</span>
                </div>

                <ul class="space-y-4 mb-8">
                    {plan.features.iter().map(|feature| view! {
                        <li class="flex items-start gap-3 text-sm">
                            <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0" />
                            {*feature}
                        </li>
                    }).collect_view()}
                </ul>

                <a
                    href="#cta"
                    class=if plan.featured { "btn-primary block w-full text-center py-3" } else { "btn-secondary block w-full text-center py-3" }
                >
                    {plan.cta}
                </a>
            </div>
        </Reveal>
    }
}

/// Latest posts from the blog
#[component]
fn BlogTeaser() -> impl IntoView {
    view! {
        <section id="blog" class="py-20 px-4 bg-slate-50">
            <div class="max-w-6xl mx-auto">
                <Reveal class="flex flex-col md:flex-row md:items-end md:justify-between gap-4 mb-12">
                    <div>
                        <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 mb-2">"From the blog"</h2>
                        <p class="text-lg text-slate-600">"Guides and research on AI-powered support."</p>
                    </div>
                    <A href="/blog" attr:class="inline-flex items-center gap-1 font-medium text-indigo-600 hover:text-indigo-700">
                        "View all articles"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </A>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8">
                    {latest_posts(3).into_iter().enumerate().map(|(i, post)| view! {
                        <Reveal delay_ms={i as u32 * 100}>
                            <PostCard post=post />
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Call-to-action section component
#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section id="cta" class="py-20 px-4">
            <Reveal class="max-w-4xl mx-auto text-center rounded-3xl bg-gradient-to-br from-indigo-600 to-violet-600 px-8 py-16 text-white shadow-2xl">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Start Your AI Journey"</h2>
                <p class="text-lg text-indigo-100 max-w-2xl mx-auto mb-8">
                    "Set up your first agent in minutes and see how many conversations it resolves on its own."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a href="#pricing" class="px-6 py-3 rounded-xl bg-white text-indigo-700 font-semibold hover:bg-indigo-50 transition-colors">
                        "Get started for free"
                    </a>
                    <a href="mailto:contact@samplinglabs.com" class="px-6 py-3 rounded-xl border border-white/40 font-semibold hover:bg-white/10 transition-colors">
                        "Book a demo"
                    </a>
                </div>
                <div class="flex items-center justify-center gap-1 mt-8 text-sm text-indigo-100">
                    {(0..5).map(|_| view! { <Icon name=icons::STAR class="w-4 h-4 invert" /> }).collect_view()}
                    <span class="ml-2">"From 2,800+ reviews"</span>
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_price_by_cycle() {
        assert_eq!(PLANS[0].price(BillingCycle::Monthly), ("$29", Some("/month")));
        assert_eq!(PLANS[1].price(BillingCycle::Annual), ("$990", Some("/year")));
    }

    #[test]
    fn test_custom_plan_has_no_period() {
        assert_eq!(PLANS[2].price(BillingCycle::Monthly), ("Custom", None));
        assert_eq!(PLANS[2].price(BillingCycle::Annual), ("Custom", None));
    }

    #[test]
    fn test_single_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }
}
