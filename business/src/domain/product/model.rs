/// A catalog entry. The id is assigned by the store on first save and never
/// reassigned; `None` means the product has not been persisted yet.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// A product that has not been persisted yet.
    pub fn new(name: String, price: f64) -> Self {
        Self {
            id: None,
            name,
            price,
        }
    }

    /// Constructor for data already persisted in the repository.
    pub fn from_repository(id: i64, name: String, price: f64) -> Self {
        Self {
            id: Some(id),
            name,
            price,
        }
    }

    /// Replaces the mutable fields (`name`, `price`) and carries every other
    /// stored attribute forward unchanged.
    pub fn apply_update(self, name: String, price: f64) -> Self {
        Self {
            name,
            price,
            ..self
        }
    }
}
