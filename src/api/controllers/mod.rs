//! # API Controllers Module
//!
//! Handles HTTP request processing and business logic coordination.
//!
//! ## Controllers
//!
//! * `actions` - Tip and memo action endpoints, `actions.json`

pub mod actions;
