mod action;
pub use action::*;

mod api;
