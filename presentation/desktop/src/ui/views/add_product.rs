use std::sync::Arc;

use business::domain::category::model::Category;
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::product::use_cases::create::CreateProductUseCase;

use crate::ui::forms::ProductForm;
use crate::ui::messages::{IntoErrorMessage, Operation};
use crate::ui::routes::Route;

pub struct AddProductView {
    create_product: Arc<dyn CreateProductUseCase>,
    get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
    categories: Vec<Category>,
    pub form: ProductForm,
}

impl AddProductView {
    pub fn new(
        create_product: Arc<dyn CreateProductUseCase>,
        get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
    ) -> Self {
        Self {
            create_product,
            get_all_categories,
            categories: Vec::new(),
            form: ProductForm::default(),
        }
    }

    /// Loads the category choices for the form.
    pub async fn open(&mut self) -> Result<(), String> {
        self.categories = self
            .get_all_categories
            .execute()
            .await
            .map_err(|e| e.into_error_message(Operation::LoadCategories))?;
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub async fn submit(&self) -> Result<Route, String> {
        self.create_product
            .execute(self.form.to_create_params())
            .await
            .map_err(|e| e.into_error_message(Operation::CreateProduct))?;
        Ok(Route::Products)
    }
}
