use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New product name
    pub name: String,
    /// New product price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Store-assigned product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.unwrap_or_default(),
            name: product.name,
            price: product.price,
        }
    }
}
