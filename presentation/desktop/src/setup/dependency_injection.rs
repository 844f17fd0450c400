use std::sync::Arc;

use logger::TracingLogger;
use supabase::auth::SupabaseAuthService;
use supabase::category::repository::CategoryRepositorySupabase;
use supabase::client::SupabaseClient;
use supabase::product::repository::ProductRepositorySupabase;

use business::application::catalog::store::CatalogStore;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::session::check_session::CheckSessionUseCaseImpl;
use business::application::session::login::LoginUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::logger::Logger;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::DeleteProductUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::session::use_cases::check_session::CheckSessionUseCase;
use business::domain::session::use_cases::login::LoginUseCase;
use business::domain::session::use_cases::logout::LogoutUseCase;

use crate::config::supabase_config::SupabaseConfig;

pub struct DependencyContainer {
    pub logger: Arc<dyn Logger>,
    pub login: Arc<dyn LoginUseCase>,
    pub check_session: Arc<dyn CheckSessionUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
    pub list_products: Arc<dyn ListProductsUseCase>,
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub update_product: Arc<dyn UpdateProductUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
    pub get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    pub get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &SupabaseConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("desktop"));
        let session_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("session"));
        let product_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("product"));
        let category_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("category"));

        // Infrastructure adapters share one client so the session reaches table requests
        let client = Arc::new(SupabaseClient::new(
            config.url.clone(),
            config.anon_key.clone(),
            config.timeout,
        ));
        let auth = Arc::new(SupabaseAuthService::new(client.clone()));
        let product_repository = Arc::new(ProductRepositorySupabase::new(client.clone()));
        let category_repository = Arc::new(CategoryRepositorySupabase::new(client));

        // Session use cases
        let login = Arc::new(LoginUseCaseImpl {
            auth: auth.clone(),
            logger: session_logger.clone(),
        });
        let check_session = Arc::new(CheckSessionUseCaseImpl {
            auth: auth.clone(),
            logger: session_logger.clone(),
        });
        let logout = Arc::new(LogoutUseCaseImpl {
            auth,
            logger: session_logger.clone(),
        });

        // Product use cases
        let list_products = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let create_product = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository,
            logger: product_logger.clone(),
        });

        // Category use cases
        let get_all_categories = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository,
            logger: category_logger,
        });

        Self {
            logger,
            login,
            check_session,
            logout,
            list_products,
            create_product,
            update_product,
            delete_product,
            get_product_by_id,
            get_all_categories,
        }
    }

    /// Fresh product list state for one visit to the catalog view.
    pub fn catalog_store(&self) -> CatalogStore {
        CatalogStore::new(
            self.list_products.clone(),
            self.delete_product.clone(),
            self.logger.clone(),
        )
    }
}
