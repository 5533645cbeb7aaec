pub mod crawler;
pub mod listing;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use crawler::{ListingPage, PageLauncher};
pub use listing::collect_links;
pub use web::{WebDriverLauncher, WebDriverPage};
