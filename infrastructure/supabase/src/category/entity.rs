use serde::Deserialize;

use business::domain::category::model::Category;
use business::domain::shared::value_objects::CategoryId;

/// Row of the `categories` table.
#[derive(Debug, Deserialize)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(CategoryId::new(self.id), self.name)
    }
}
