//! Text transformation library
//!
//! The normalizer, the shared sentence splitter, and the four step
//! transformations. Everything here is a pure function over strings.

pub mod normalize;
pub mod sentence;
pub mod steps;

pub use normalize::normalize;
pub use sentence::split_sentences;
pub use steps::{clean, extract_key_points, summarize, tag_category, CATEGORY_RULES, GENERAL_CATEGORY};
