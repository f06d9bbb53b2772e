//! Game implementations.

pub mod pattern;
