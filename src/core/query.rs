//! Read-only queries over the blog post collection
//!
//! Every function here is pure: results depend only on the slice passed in
//! and always keep the slice's ordering.

use super::content::BlogPost;

/// Maximum number of entries returned by [`related_posts`]
pub const RELATED_POSTS_LIMIT: usize = 2;

/// Content lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("no post with slug `{slug}`")]
    PostNotFound { slug: String },
}

/// Search and category filter held by the blog listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Case-insensitive substring matched against title, excerpt and author
    pub text: String,
    /// Exact category match; `None` accepts every category
    pub category: Option<String>,
}

impl PostQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.category.is_none()
    }

    /// Whether `post` passes both the text and the category predicate
    pub fn matches(&self, post: &BlogPost) -> bool {
        self.matches_text(post) && self.matches_category(post)
    }

    fn matches_text(&self, post: &BlogPost) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        [&post.title, &post.excerpt, &post.author]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, post: &BlogPost) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| post.category == category)
    }
}

/// Posts matching `query`, in collection order
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &PostQuery) -> Vec<&'a BlogPost> {
    posts.iter().filter(|post| query.matches(post)).collect()
}

/// Distinct categories in order of first appearance
pub fn categories(posts: &[BlogPost]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for post in posts {
        if !seen.contains(&post.category.as_str()) {
            seen.push(&post.category);
        }
    }
    seen
}

/// Look up a post by its exact, case-sensitive slug
pub fn resolve_post_by_slug<'a>(
    posts: &'a [BlogPost],
    slug: &str,
) -> Result<&'a BlogPost, ContentError> {
    posts
        .iter()
        .find(|post| post.slug == slug)
        .ok_or_else(|| ContentError::PostNotFound {
            slug: slug.to_string(),
        })
}

/// Up to [`RELATED_POSTS_LIMIT`] other posts sharing the category of `post`
pub fn related_posts<'a>(posts: &'a [BlogPost], post: &BlogPost) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|other| other.category == post.category && other.id != post.id)
        .take(RELATED_POSTS_LIMIT)
        .collect()
}

/// Neighbours of a post by collection position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a BlogPost>,
    pub next: Option<&'a BlogPost>,
}

/// Previous and next posts by position in `posts`, not by publication date.
///
/// A post that is not part of `posts` has no neighbours.
pub fn adjacent_posts<'a>(posts: &'a [BlogPost], post: &BlogPost) -> Adjacent<'a> {
    let Some(index) = posts.iter().position(|p| p.id == post.id) else {
        return Adjacent {
            previous: None,
            next: None,
        };
    };

    Adjacent {
        previous: index.checked_sub(1).and_then(|i| posts.get(i)),
        next: posts.get(index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, slug: &str, category: &str) -> BlogPost {
        BlogPost::new(id, format!("Post {}", slug), slug).with_category(category)
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let p = BlogPost::new(1, "Measuring ROI", "roi");
        assert!(PostQuery::new("roi").matches(&p));
        assert!(PostQuery::new("MEASURING").matches(&p));
        assert!(!PostQuery::new("chatbot").matches(&p));
    }

    #[test]
    fn test_query_matches_excerpt_and_author() {
        let p = BlogPost::new(1, "Title", "t")
            .with_excerpt("All about escalation")
            .with_author("Maria Chen");
        assert!(PostQuery::new("escalation").matches(&p));
        assert!(PostQuery::new("chen").matches(&p));
    }

    #[test]
    fn test_query_ignores_body_and_category_text() {
        let p = BlogPost::new(1, "Title", "t")
            .with_category("Development")
            .with_body("<p>secret words</p>");
        assert!(!PostQuery::new("secret").matches(&p));
        assert!(!PostQuery::new("development").matches(&p));
    }

    #[test]
    fn test_category_is_exact() {
        let p = post(1, "a", "Development");
        assert!(PostQuery::default().in_category("Development").matches(&p));
        assert!(!PostQuery::default().in_category("development").matches(&p));
    }

    #[test]
    fn test_query_is_empty() {
        assert!(PostQuery::default().is_empty());
        assert!(!PostQuery::new("x").is_empty());
        assert!(!PostQuery::default().in_category("x").is_empty());
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let posts = vec![post(1, "a", "x"), post(2, "b", "y")];
        let result = filter_posts(&posts, &PostQuery::new("nothing here"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let posts = vec![post(1, "a", "x"), post(2, "b", "y"), post(3, "c", "x")];
        assert_eq!(categories(&posts), vec!["x", "y"]);
    }

    #[test]
    fn test_categories_of_empty_collection() {
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_resolve_missing_slug_error() {
        let posts = vec![post(1, "a", "x")];
        let err = resolve_post_by_slug(&posts, "zzz").unwrap_err();
        assert_eq!(
            err,
            ContentError::PostNotFound {
                slug: "zzz".to_string()
            }
        );
        assert_eq!(err.to_string(), "no post with slug `zzz`");
    }

    #[test]
    fn test_related_capped_at_two() {
        let posts = vec![
            post(1, "a", "x"),
            post(2, "b", "x"),
            post(3, "c", "x"),
            post(4, "d", "x"),
        ];
        let related = related_posts(&posts, &posts[0]);
        let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "c"]);
    }

    #[test]
    fn test_related_empty_for_unique_category() {
        let posts = vec![post(1, "a", "x"), post(2, "b", "y")];
        assert!(related_posts(&posts, &posts[1]).is_empty());
    }

    #[test]
    fn test_adjacent_for_foreign_post() {
        let posts = vec![post(1, "a", "x"), post(2, "b", "x")];
        let stranger = post(99, "q", "x");
        let adjacent = adjacent_posts(&posts, &stranger);
        assert!(adjacent.previous.is_none());
        assert!(adjacent.next.is_none());
    }

    #[test]
    fn test_adjacent_single_post() {
        let posts = vec![post(1, "a", "x")];
        let adjacent = adjacent_posts(&posts, &posts[0]);
        assert!(adjacent.previous.is_none());
        assert!(adjacent.next.is_none());
    }
}
