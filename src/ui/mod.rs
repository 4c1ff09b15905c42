pub mod chart;
pub mod common;
pub mod counter;
pub mod events;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod parallax;
pub mod timers;
pub mod visibility;

pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use visibility::{Reveal, use_visibility};
