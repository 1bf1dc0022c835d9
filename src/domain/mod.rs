//! Core logic of the actions: validating requests and assembling unsigned
//! transactions. Nothing here knows about HTTP.

pub mod actions;
pub use actions::*;
