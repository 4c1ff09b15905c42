//! Canonical URLs, structured data and share links

use derive_more::Display;
use serde_json::json;

use super::content::BlogPost;
use super::format::iso_date;

/// Site identity used when building absolute URLs and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    /// Absolute origin without a trailing slash; `None` keeps URLs relative
    pub base_url: Option<String>,
    pub site_name: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            base_url: None,
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

pub const DEFAULT_SITE_NAME: &str = "Sampling Labs";

impl SiteMeta {
    pub fn canonical_url(&self, path: &str) -> String {
        canonical_url(self.base_url.as_deref(), path)
    }

    /// `<title>` text for a page
    pub fn page_title(&self, page: &str) -> String {
        format!("{} - {}", page, self.site_name)
    }
}

/// Join an optional origin and a site-relative path
pub fn canonical_url(base: Option<&str>, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    match base {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => path,
    }
}

/// schema.org `BlogPosting` for a post page
pub fn blog_posting_json_ld(post: &BlogPost, site: &SiteMeta) -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.excerpt,
        "image": post.cover_image_url,
        "datePublished": iso_date(post.published),
        "articleSection": post.category,
        "author": { "@type": "Person", "name": post.author },
        "publisher": { "@type": "Organization", "name": site.site_name },
        "mainEntityOfPage": site.canonical_url(&post.path()),
    })
    .to_string()
}

/// schema.org `Organization` for the landing page
pub fn organization_json_ld(site: &SiteMeta) -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.site_name,
        "url": site.canonical_url("/"),
        "description": "AI agents that resolve customer support conversations around the clock",
    })
    .to_string()
}

/// Social networks offered on the post page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ShareTarget {
    #[display("Twitter")]
    Twitter,
    #[display("Facebook")]
    Facebook,
    #[display("LinkedIn")]
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::LinkedIn,
    ];

    pub fn share_url(self, page_url: &str, title: &str) -> String {
        let url = urlencoding::encode(page_url);
        match self {
            ShareTarget::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(title),
                url
            ),
            ShareTarget::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={}", url)
            }
            ShareTarget::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                url
            ),
        }
    }
}
