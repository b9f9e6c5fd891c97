//! Field extractors. Each tries an ordered list of selection strategies and
//! falls back to the next one when a strategy yields nothing usable.

pub mod content;
pub mod date;
pub mod image;
pub mod intro;
pub mod title;
