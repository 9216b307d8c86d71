// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod photo_store;
pub mod product_repository;

// Re-exports
pub use config::UploadConfig;
pub use logging::init_logging;
pub use photo_store::{PhotoStore, PhotoStoreError, S3PhotoStore};
pub use product_repository::{DynamoProductRepository, ProductRepository, ProductRepositoryError};
