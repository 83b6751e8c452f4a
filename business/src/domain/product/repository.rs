use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Presence-tagged lookup: `Ok(None)` when no record carries the id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    /// Inserts (assigning an id) when the product carries none, otherwise
    /// overwrites the record with the matching id. Returns the persisted state.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
