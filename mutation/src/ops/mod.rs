//! Individual mutation operations.

mod cast;
mod director;
mod genre;
mod rating;

pub use cast::add_cast_member;
pub use director::remove_director;
pub use genre::set_genre;
pub use rating::set_rating;
