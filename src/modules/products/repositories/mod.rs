pub mod memory_repository;
pub mod product_repository;

pub use memory_repository::InMemoryProductRepository;
pub use product_repository::{MySqlProductRepository, ProductRepository, StoreResult};
