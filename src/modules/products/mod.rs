// Products module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Product, UpdateProductRequest};
pub use repositories::{InMemoryProductRepository, MySqlProductRepository, ProductRepository};
pub use services::ProductService;
