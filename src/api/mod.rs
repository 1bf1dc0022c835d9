//! # API Module
//!
//! Contains the HTTP surface of the actions server.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and business logic coordination
//! * `routes` - API endpoint definitions and routing
//! * `middleware` - HTTP middleware (Actions CORS headers)

pub mod controllers;

pub mod middleware;

pub mod routes;
