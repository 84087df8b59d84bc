#![allow(clippy::cargo_common_metadata)]

pub mod config;
pub mod error;
pub mod filter;
pub mod section;
pub mod song;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, SetlistError};
pub use filter::{FilterState, SortMode, ViewMode};
pub use section::Section;
pub use song::{Era, Language, Song, Tempo};
