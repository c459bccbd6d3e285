//! Product Catalog Service Library
//!
//! Product CRUD with soft delete, pagination and batch existence checks over
//! a MySQL store, exposed through actix-web handlers.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::products;
