//! Utility functions.
//!
//! - [`alias_generator`] - Random alias generation for saves without an alias

pub mod alias_generator;
