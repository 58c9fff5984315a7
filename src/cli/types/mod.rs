//! Type-safe wrappers and enums for player evaluation requests.

pub mod level;
pub mod sort;
pub mod time;


pub use level::LogLevel;
pub use sort::SortBy;
pub use time::Season;
