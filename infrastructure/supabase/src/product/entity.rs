use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, ProductChanges};
use business::domain::shared::value_objects::{CategoryId, ProductId};

/// Row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            category_id: product.category_id.value(),
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.price,
            CategoryId::new(self.category_id),
        )
    }
}

/// PATCH body; omitted fields are left as they are.
#[derive(Debug, Serialize)]
pub struct ProductChangesEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl From<&ProductChanges> for ProductChangesEntity {
    fn from(changes: &ProductChanges) -> Self {
        Self {
            name: changes.name.clone(),
            price: changes.price,
            category_id: changes.category_id.map(|id| id.value()),
        }
    }
}
