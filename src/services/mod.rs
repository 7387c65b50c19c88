// Service exports
pub mod cache;
pub mod profiles;

pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use profiles::{ProfileStoreClient, ProfileStoreError};
