//! welcome library
//!
//! A fixed greeting and a generic offset-pair value type.

pub mod greeting;
pub mod pair;

// Re-export main types for convenience
pub use greeting::{write_greeting, GREETING};
pub use pair::OffsetPair;
