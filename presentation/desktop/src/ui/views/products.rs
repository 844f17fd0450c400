use std::sync::Arc;

use business::application::catalog::store::{CatalogPhase, CatalogStore, LoadOutcome};
use business::domain::category::model::Category;
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::logger::Logger;
use business::domain::product::filter::FilterInput;
use business::domain::shared::value_objects::ProductId;

use crate::ui::forms::set_filter;
use crate::ui::messages::{IntoErrorMessage, Operation};
use crate::ui::table::render_products;

/// Product list screen: the catalog store for this visit, the category lookup
/// and the filter panel contents.
pub struct ProductsView {
    store: CatalogStore,
    get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
    logger: Arc<dyn Logger>,
    categories: Vec<Category>,
    filters: FilterInput,
    filter_error: Option<String>,
    show_filters: bool,
}

impl ProductsView {
    pub fn new(
        store: CatalogStore,
        get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            store,
            get_all_categories,
            logger,
            categories: Vec::new(),
            filters: FilterInput::default(),
            filter_error: None,
            show_filters: false,
        }
    }

    /// First render: unfiltered products plus the category names.
    pub async fn open(&mut self) {
        self.load_categories().await;
        self.reload().await;
    }

    /// A failed category load leaves the list empty; rows then show "N/A".
    async fn load_categories(&mut self) {
        match self.get_all_categories.execute().await {
            Ok(categories) => self.categories = categories,
            Err(e) => self
                .logger
                .warn(&format!("Categories unavailable for product table: {}", e)),
        }
    }

    /// Reloads with the filter panel's current values. Malformed values are
    /// reported without touching the backend and yield `None`.
    pub async fn reload(&mut self) -> Option<LoadOutcome> {
        match self.filters.parse() {
            Ok(filters) => {
                self.filter_error = None;
                Some(self.store.load(filters).await)
            }
            Err(e) => {
                self.filter_error = Some(e.into_error_message(Operation::LoadProducts));
                None
            }
        }
    }

    pub fn set_filter(&mut self, field: &str, value: &str) -> Result<(), String> {
        set_filter(&mut self.filters, field, value)
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub async fn product_name(&self, id: &ProductId) -> Option<String> {
        self.store
            .snapshot()
            .await
            .products
            .into_iter()
            .find(|product| &product.id == id)
            .map(|product| product.name)
    }

    pub async fn delete(&self, id: &ProductId) -> Result<(), String> {
        self.store
            .remove(id)
            .await
            .map_err(|e| e.into_error_message(Operation::DeleteProduct))
    }

    pub async fn render(&self) -> String {
        let state = self.store.snapshot().await;
        let mut out = String::from("Productos\n");

        if let Some(error) = &self.filter_error {
            out.push_str(&format!("! {}\n", error));
        }
        // Delete failures are reported by `delete` itself.
        if state.phase == CatalogPhase::Errored
            && let Some(error) = &state.error
        {
            let message = error.clone().into_error_message(Operation::LoadProducts);
            out.push_str(&format!("! {}\n", message));
        }
        if self.show_filters {
            out.push_str(&self.render_filters());
        }

        if state.is_loading() {
            out.push_str("Recargando productos...\n");
        } else {
            out.push_str(&render_products(&state.products, &self.categories));
        }
        out
    }

    fn render_filters(&self) -> String {
        let categories: Vec<String> = self
            .categories
            .iter()
            .map(|category| format!("{}={}", category.id, category.name))
            .collect();

        format!(
            "Filtros\n  Categoría (category): {} [{}]\n  Precio Mínimo (min): {}\n  Precio Máximo (max): {}\n  Ordenar por (sort): {} [name, price]\n  Orden (order): {} [asc, desc]\n",
            self.filters.category_id,
            categories.join(", "),
            self.filters.price_min,
            self.filters.price_max,
            self.filters.sort_by,
            self.filters.sort_order,
        )
    }
}
