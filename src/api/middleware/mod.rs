pub mod cors;

pub use cors::actions_headers;
