use business::domain::product::errors::ProductError;
use business::domain::product::filter::FilterInput;
use business::domain::product::model::{Product, parse_category_id, parse_price};
use business::domain::product::use_cases::create::CreateProductParams;

/// Field names accepted by `set` on the product form, with their labels.
pub const PRODUCT_FIELDS: [(&str, &str); 4] = [
    ("id", "ID"),
    ("name", "Nombre"),
    ("price", "Precio"),
    ("category_id", "Categoría"),
];

/// Product form contents exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category_id: String,
}

impl ProductForm {
    /// Pre-filled from a stored product, for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            category_id: product.category_id.to_string(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "price" => Some(&self.price),
            "category_id" => Some(&self.category_id),
            _ => None,
        }
    }

    pub fn set(&mut self, field: &str, value: &str) -> Result<(), String> {
        let slot = match field {
            "id" => &mut self.id,
            "name" => &mut self.name,
            "price" => &mut self.price,
            "category_id" => &mut self.category_id,
            _ => return Err(format!("Campo desconocido: {}", field)),
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn to_create_params(&self) -> CreateProductParams {
        CreateProductParams {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            category_id: self.category_id.clone(),
        }
    }

    /// Applies the edited name, price and category onto `original`. The id is
    /// never editable.
    pub fn edited(&self, original: &Product) -> Result<Product, ProductError> {
        if self.name.is_empty() {
            return Err(ProductError::MissingFields);
        }

        Ok(Product {
            id: original.id.clone(),
            name: self.name.clone(),
            price: parse_price(&self.price)?,
            category_id: parse_category_id(&self.category_id)?,
        })
    }
}

/// Filter panel field names, as the panel labels them.
pub fn set_filter(input: &mut FilterInput, field: &str, value: &str) -> Result<(), String> {
    let slot = match field {
        "category" | "category_id" => &mut input.category_id,
        "min" | "price_min" => &mut input.price_min,
        "max" | "price_max" => &mut input.price_max,
        "sort" | "sort_by" => &mut input.sort_by,
        "order" | "sort_order" => &mut input.sort_order,
        _ => return Err(format!("Filtro desconocido: {}", field)),
    };
    *slot = value.to_string();
    Ok(())
}
