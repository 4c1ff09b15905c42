//! Site content, queries and the platform-independent pieces of the UI behaviour

#[cfg(feature = "ssr")]
pub mod config;
mod content;
pub mod dashboard;
pub mod format;
pub mod motion;
mod query;
pub mod seo;
#[cfg(test)]
mod tests;
mod visibility;

pub use content::*;
pub use query::*;
pub use seo::{ShareTarget, SiteMeta};
pub use visibility::*;
