use super::errors::ProductError;
use crate::domain::shared::value_objects::{CategoryId, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.id.as_str().trim().is_empty() {
            return Err(ProductError::IdEmpty);
        }

        if props.name.is_empty() {
            return Err(ProductError::MissingFields);
        }

        if !props.price.is_finite() {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            category_id: props.category_id,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category_id,
        }
    }
}

/// Coerces a typed-in price; anything that is not a finite number is rejected.
pub fn parse_price(raw: &str) -> Result<f64, ProductError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or(ProductError::InvalidPrice)
}

pub fn parse_category_id(raw: &str) -> Result<CategoryId, ProductError> {
    raw.trim()
        .parse::<i64>()
        .map(CategoryId::new)
        .map_err(|_| ProductError::InvalidCategory)
}

/// Partial update of a product. `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<CategoryId>,
}

impl ProductChanges {
    /// Only the fields whose value differs between `before` and `after`.
    pub fn between(before: &Product, after: &Product) -> Self {
        Self {
            name: (before.name != after.name).then(|| after.name.clone()),
            price: (before.price != after.price).then_some(after.price),
            category_id: (before.category_id != after.category_id).then_some(after.category_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category_id.is_none()
    }

    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(id: &str, name: &str) -> NewProductProps {
        NewProductProps {
            id: ProductId::new(id),
            name: name.to_string(),
            price: 12.5,
            category_id: CategoryId::new(1),
        }
    }

    #[test]
    fn should_create_product_when_props_are_valid() {
        let product = Product::new(props("P-1", "Teclado")).unwrap();

        assert_eq!(product.id.as_str(), "P-1");
        assert_eq!(product.name, "Teclado");
        assert_eq!(product.price, 12.5);
        assert_eq!(product.category_id, CategoryId::new(1));
    }

    #[test]
    fn should_reject_product_when_id_is_blank() {
        let result = Product::new(props("   ", "Teclado"));
        assert!(matches!(result, Err(ProductError::IdEmpty)));
    }

    #[test]
    fn should_reject_product_when_name_is_empty() {
        let result = Product::new(props("P-1", ""));
        assert!(matches!(result, Err(ProductError::MissingFields)));
    }

    #[test]
    fn should_accept_negative_price() {
        let mut p = props("P-1", "Descuento");
        p.price = -3.0;
        assert!(Product::new(p).is_ok());
    }

    #[test]
    fn should_coerce_numeric_form_values() {
        assert_eq!(parse_price(" 19.90 "), Ok(19.9));
        assert_eq!(parse_price("abc"), Err(ProductError::InvalidPrice));
        assert_eq!(parse_price("inf"), Err(ProductError::InvalidPrice));
        assert_eq!(parse_category_id("4"), Ok(CategoryId::new(4)));
        assert_eq!(parse_category_id("4.5"), Err(ProductError::InvalidCategory));
    }

    #[test]
    fn should_only_carry_changed_fields_when_diffing() {
        let before = Product::from_repository(
            ProductId::new("P-1"),
            "Mouse".to_string(),
            10.0,
            CategoryId::new(2),
        );
        let mut after = before.clone();
        after.price = 15.0;

        let changes = ProductChanges::between(&before, &after);

        assert_eq!(
            changes,
            ProductChanges {
                name: None,
                price: Some(15.0),
                category_id: None,
            }
        );
    }

    #[test]
    fn should_be_empty_when_nothing_changed() {
        let product = Product::from_repository(
            ProductId::new("P-1"),
            "Mouse".to_string(),
            10.0,
            CategoryId::new(2),
        );
        assert!(ProductChanges::between(&product, &product).is_empty());
    }

    #[test]
    fn should_leave_omitted_fields_untouched_when_applied() {
        let mut product = Product::from_repository(
            ProductId::new("P-1"),
            "Mouse".to_string(),
            10.0,
            CategoryId::new(2),
        );
        ProductChanges {
            price: Some(15.0),
            ..Default::default()
        }
        .apply_to(&mut product);

        assert_eq!(product.name, "Mouse");
        assert_eq!(product.category_id, CategoryId::new(2));
        assert_eq!(product.price, 15.0);
    }
}
