use std::sync::Arc;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::ui::forms::ProductForm;
use crate::ui::messages::{IntoErrorMessage, Operation};
use crate::ui::routes::Route;

/// Edit screen for one product. Only name, price and category are editable;
/// saving sends just the fields that changed.
pub struct EditProductView {
    get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    update_product: Arc<dyn UpdateProductUseCase>,
    id: ProductId,
    original: Option<Product>,
    pub form: ProductForm,
}

impl EditProductView {
    pub fn new(
        get_product_by_id: Arc<dyn GetProductByIdUseCase>,
        update_product: Arc<dyn UpdateProductUseCase>,
        id: ProductId,
    ) -> Self {
        Self {
            get_product_by_id,
            update_product,
            id,
            original: None,
            form: ProductForm::default(),
        }
    }

    pub async fn open(&mut self) -> Result<(), String> {
        let product = self
            .get_product_by_id
            .execute(GetProductByIdParams {
                id: self.id.clone(),
            })
            .await
            .map_err(|e| e.into_error_message(Operation::FetchProduct))?;

        self.form = ProductForm::from_product(&product);
        self.original = Some(product);
        Ok(())
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        if field == "id" {
            return Err("El ID no se puede modificar.".to_string());
        }
        self.form.set(field, value)
    }

    pub async fn submit(&self) -> Result<Route, String> {
        let original = self
            .original
            .as_ref()
            .ok_or_else(|| ProductError::NotFound.into_error_message(Operation::FetchProduct))?;

        let edited = self
            .form
            .edited(original)
            .map_err(|e| e.into_error_message(Operation::UpdateProduct))?;

        self.update_product
            .execute(UpdateProductParams {
                id: self.id.clone(),
                changes: ProductChanges::between(original, &edited),
            })
            .await
            .map_err(|e| e.into_error_message(Operation::UpdateProduct))?;

        Ok(Route::Products)
    }
}
