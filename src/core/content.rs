//! Blog content store
//!
//! The post collection is built once on first access and never mutated.
//! Post bodies are trusted, author-controlled HTML and are rendered verbatim,
//! so anything user-supplied must be sanitized before it lands here.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single blog article
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    /// Routable key, unique and case-sensitive
    pub slug: String,
    pub excerpt: String,
    pub cover_image_url: String,
    /// Free-text label; the set of categories is derived from the posts
    pub category: String,
    pub published: NaiveDate,
    pub author: String,
    pub read_time_minutes: u32,
    /// Pre-rendered markup, inserted without sanitization
    pub body_html: String,
}

impl BlogPost {
    pub fn new(id: u32, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            excerpt: String::new(),
            cover_image_url: String::new(),
            category: String::new(),
            published: NaiveDate::default(),
            author: String::new(),
            read_time_minutes: 1,
            body_html: String::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_cover(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = url.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.published = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
        self
    }

    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time_minutes = minutes.max(1);
        self
    }

    pub fn with_body(mut self, html: impl Into<String>) -> Self {
        self.body_html = html.into();
        self
    }

    /// Site-relative path of the post detail page
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

static POSTS: LazyLock<Vec<BlogPost>> = LazyLock::new(seed_posts);

/// All published posts in display order
pub fn all_posts() -> &'static [BlogPost] {
    &POSTS
}

/// The most recent `count` posts by publication date, newest first
pub fn latest_posts(count: usize) -> Vec<&'static BlogPost> {
    let mut posts: Vec<&BlogPost> = all_posts().iter().collect();
    posts.sort_by(|a, b| b.published.cmp(&a.published));
    posts.truncate(count);
    posts
}

const UNSPLASH_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80";

fn cover(photo: &str) -> String {
    format!("https://images.unsplash.com/{}{}", photo, UNSPLASH_PARAMS)
}

fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost::new(
            1,
            "How AI is Revolutionizing Customer Support",
            "how-ai-is-revolutionizing-customer-support",
        )
        .with_excerpt(
            "Discover how AI-powered agents are transforming customer support operations, \
             reducing response times, and improving customer satisfaction.",
        )
        .with_cover(cover("photo-1571171637578-41bc2dd41cd2"))
        .with_category("AI Technology")
        .published_on(2023, 9, 15)
        .with_author("Alex Johnson")
        .with_read_time(5)
        .with_body(include_str!(
            "../../content/posts/how-ai-is-revolutionizing-customer-support.html"
        )),
        BlogPost::new(
            2,
            "Building Effective AI Agents: A Complete Guide",
            "building-effective-ai-agents-complete-guide",
        )
        .with_excerpt(
            "Learn the step-by-step process of creating AI agents that deliver exceptional \
             customer experiences while driving business growth.",
        )
        .with_cover(cover("photo-1620712943543-bcc4688e7485"))
        .with_category("Development")
        .published_on(2023, 10, 2)
        .with_author("Maria Chen")
        .with_read_time(8)
        .with_body(include_str!(
            "../../content/posts/building-effective-ai-agents-complete-guide.html"
        )),
        BlogPost::new(
            3,
            "Measuring the ROI of AI-Powered Support",
            "measuring-roi-ai-powered-support",
        )
        .with_excerpt(
            "Explore the key metrics and methodologies for calculating the true return on \
             investment of implementing AI agents in your customer support operations.",
        )
        .with_cover(cover("photo-1543286386-713bdd548da4"))
        .with_category("Business Strategy")
        .published_on(2023, 10, 18)
        .with_author("Robert Williams")
        .with_read_time(6)
        .with_body(include_str!(
            "../../content/posts/measuring-roi-ai-powered-support.html"
        )),
        BlogPost::new(
            4,
            "AI Support Agents vs. Traditional Chatbots: What's the Difference?",
            "ai-support-agents-vs-traditional-chatbots",
        )
        .with_excerpt(
            "Understand the key distinctions between modern AI agents and legacy chatbots, \
             and why these differences matter for customer experience.",
        )
        .with_cover(cover("photo-1635070041078-e363dbe005cb"))
        .with_category("Technology")
        .published_on(2023, 11, 5)
        .with_author("Sophia Lee")
        .with_read_time(4)
        .with_body(include_str!(
            "../../content/posts/ai-support-agents-vs-traditional-chatbots.html"
        )),
        BlogPost::new(
            5,
            "Designing AI Conversations Customers Actually Trust",
            "designing-ai-conversations-customers-trust",
        )
        .with_excerpt(
            "Tone, transparency and graceful hand-offs: the conversation design choices \
             that decide whether customers keep talking to your agent.",
        )
        .with_cover(cover("photo-1553877522-43269d4ea984"))
        .with_category("AI Technology")
        .published_on(2023, 11, 21)
        .with_author("Maria Chen")
        .with_read_time(5)
        .with_body(include_str!(
            "../../content/posts/designing-ai-conversations-customers-trust.html"
        )),
        BlogPost::new(
            6,
            "Scaling Support for Peak Season Without Burning Out Your Team",
            "scaling-support-for-peak-season",
        )
        .with_excerpt(
            "A practical playbook for handling holiday spikes, launches and outages with \
             an AI agent absorbing the routine volume.",
        )
        .with_cover(cover("photo-1556761175-b413da4baf72"))
        .with_category("Business Strategy")
        .published_on(2023, 12, 4)
        .with_author("Robert Williams")
        .with_read_time(7)
        .with_body(include_str!(
            "../../content/posts/scaling-support-for-peak-season.html"
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_slugs_are_unique() {
        let slugs: HashSet<&str> = all_posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), all_posts().len());
    }

    #[test]
    fn test_seed_ids_are_ascending() {
        let ids: Vec<u32> = all_posts().iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_seed_dates_are_valid() {
        for post in all_posts() {
            assert_ne!(post.published, NaiveDate::default(), "{}", post.slug);
        }
    }

    #[test]
    fn test_seed_slugs_are_url_safe() {
        for post in all_posts() {
            assert!(!post.slug.is_empty());
            assert!(
                post.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{}",
                post.slug
            );
        }
    }

    #[test]
    fn test_seed_bodies_are_present() {
        for post in all_posts() {
            assert!(post.body_html.starts_with("<p>"), "{}", post.slug);
            assert!(post.read_time_minutes > 0);
        }
    }

    #[test]
    fn test_read_time_is_at_least_one() {
        let post = BlogPost::new(1, "t", "t").with_read_time(0);
        assert_eq!(post.read_time_minutes, 1);
    }

    #[test]
    fn test_invalid_date_falls_back_to_default() {
        let post = BlogPost::new(1, "t", "t").published_on(2023, 2, 30);
        assert_eq!(post.published, NaiveDate::default());
    }

    #[test]
    fn test_post_path() {
        let post = BlogPost::new(1, "Hello", "hello-world");
        assert_eq!(post.path(), "/blog/hello-world");
    }

    #[test]
    fn test_latest_posts_newest_first() {
        let latest = latest_posts(3);
        assert_eq!(latest.len(), 3);
        assert!(latest[0].published >= latest[1].published);
        assert!(latest[1].published >= latest[2].published);
        assert_eq!(latest[0].slug, "scaling-support-for-peak-season");
    }

    #[test]
    fn test_latest_posts_caps_at_collection_size() {
        assert_eq!(latest_posts(100).len(), all_posts().len());
    }
}
