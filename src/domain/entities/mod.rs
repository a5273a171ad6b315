//! Core domain entities.
//!
//! The service persists exactly one kind of record, [`ShortLink`]. It is
//! created once, read any number of times, and removed by alias. There is no
//! update path.

pub mod short_link;

pub use short_link::ShortLink;
