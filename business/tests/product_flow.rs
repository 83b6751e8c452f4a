use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

/// In-memory stand-in for the persistence port: ids are assigned from a
/// monotonic counter and never reused, matching the store contract.
struct InMemoryProductRepository {
    rows: Mutex<HashMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let id = product
            .id
            .unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst));
        let persisted = Product::from_repository(id, product.name.clone(), product.price);
        self.rows.lock().unwrap().insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

#[tokio::test]
async fn product_survives_create_read_update_and_disappears_after_delete() {
    let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
    let logger: Arc<dyn Logger> = Arc::new(SilentLogger);

    let create = CreateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    };
    let get_by_id = GetProductByIdUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    };
    let update = UpdateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    };
    let delete = DeleteProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    };

    // Create: the store assigns the id.
    let created = create
        .execute(CreateProductParams {
            name: "Test Product".to_string(),
            price: 100.0,
        })
        .await
        .unwrap();
    let id = created.id.expect("store assigns an id on first save");

    // Read back by id.
    let fetched = get_by_id
        .execute(GetProductByIdParams { id })
        .await
        .unwrap();
    assert_eq!(fetched.name, "Test Product");
    assert_eq!(fetched.price, 100.0);

    // Update name and price; the id survives the merge.
    let updated = update
        .execute(UpdateProductParams {
            id,
            name: "Updated product".to_string(),
            price: 200.0,
        })
        .await
        .unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Updated product");
    assert_eq!(updated.price, 200.0);

    // Read back reflects the update.
    let fetched = get_by_id
        .execute(GetProductByIdParams { id })
        .await
        .unwrap();
    assert_eq!(fetched.name, "Updated product");
    assert_eq!(fetched.price, 200.0);

    // Delete, then the read fails.
    delete.execute(DeleteProductParams { id }).await.unwrap();

    let result = get_by_id.execute(GetProductByIdParams { id }).await;
    assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
}
