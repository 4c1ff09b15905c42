//! Application pages module
//!
//! - Landing page (home)
//! - Blog listing
//! - Blog post
//! - Not found

pub mod blog;
mod blog_post;
pub mod footer;
mod landing;
mod not_found;

pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use landing::IndexPage;
pub use not_found::NotFoundPage;
