//! Reel Core Types
//!
//! This crate provides the foundational types used throughout Reel:
//! - Value types (the Value enum covering every shape a movie field can take)
//! - The insertion-ordered Record backing movie objects
//! - Type tags (TypeTag) for shallow runtime type checks

mod record;
mod value;

pub use record::*;
pub use value::*;
