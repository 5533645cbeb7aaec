pub mod html;
pub mod images;


pub use html::{ListingParser, ListingSnapshot, NextPage};
pub use images::ImageExtractor;
