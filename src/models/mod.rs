mod action;
pub use action::*;

mod app_state;
pub use app_state::*;

mod error;
pub use error::*;
