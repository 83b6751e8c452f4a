use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Verify product exists, then merge only the whitelisted fields onto it
        let existing = self
            .repository
            .find_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound(params.id))?;

        let merged = existing.apply_update(params.name, params.price);
        let saved = self.repository.save(&merged).await?;

        self.logger
            .info(&format!("Product updated: {}", params.id));
        Ok(saved)
    }
}
