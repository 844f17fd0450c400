use crate::domain::shared::value_objects::CategoryId;

/// Read-only from this application's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn from_repository(id: CategoryId, name: String) -> Self {
        Self { id, name }
    }
}

/// Looks up the display name of `id` among `categories`.
pub fn category_name(categories: &[Category], id: CategoryId) -> Option<&str> {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.as_str())
}
