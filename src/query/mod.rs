//! Multi-wildcard expansion

mod core;
mod segments;
mod types;

pub use self::core::QueryExpander;
pub use segments::{Segments, split_segments};
pub use types::{Expansion, QueryString};
