use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::FilterConfiguration;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::list::ListProductsUseCase;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// What the product list view renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub phase: CatalogPhase,
    pub error: Option<ProductError>,
    pub filters: FilterConfiguration,
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        self.phase == CatalogPhase::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Committed,
    /// A newer load started before this one finished; its result was dropped.
    Superseded,
}

/// Product list state for one catalog view session.
///
/// Every `load` takes a new generation number. Only a load whose generation is
/// still the latest when its query completes may write its result, so
/// overlapping loads can finish in any order without an older result
/// overwriting a newer one.
pub struct CatalogStore {
    list_products: Arc<dyn ListProductsUseCase>,
    delete_product: Arc<dyn DeleteProductUseCase>,
    logger: Arc<dyn Logger>,
    state: Mutex<CatalogState>,
    generation: AtomicU64,
}

impl CatalogStore {
    pub fn new(
        list_products: Arc<dyn ListProductsUseCase>,
        delete_product: Arc<dyn DeleteProductUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            list_products,
            delete_product,
            logger,
            state: Mutex::new(CatalogState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> CatalogState {
        self.state.lock().await.clone()
    }

    pub async fn load(&self, filters: FilterConfiguration) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().await;
            state.phase = CatalogPhase::Loading;
            state.filters = filters.clone();
        }

        let result = self.list_products.execute(filters.clone()).await;

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            self.logger.debug(&format!(
                "Discarding catalog load #{} superseded by a newer request",
                generation
            ));
            return LoadOutcome::Superseded;
        }

        *state = match result {
            Ok(products) => CatalogState {
                products,
                phase: CatalogPhase::Loaded,
                error: None,
                filters,
            },
            Err(e) => CatalogState {
                products: Vec::new(),
                phase: CatalogPhase::Errored,
                error: Some(e),
                filters,
            },
        };
        LoadOutcome::Committed
    }

    /// Deletes `id` and drops it from the current list without reloading.
    /// On failure the list is kept and the error is recorded.
    pub async fn remove(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = self
            .delete_product
            .execute(DeleteProductParams { id: id.clone() })
            .await;

        let mut state = self.state.lock().await;
        match result {
            Ok(()) => {
                state.products.retain(|product| &product.id != id);
                state.error = None;
                Ok(())
            }
            Err(e) => {
                state.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
