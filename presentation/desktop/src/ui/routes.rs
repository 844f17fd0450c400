use std::fmt;
use std::str::FromStr;

use business::domain::shared::value_objects::ProductId;

/// Screens of the front-end, addressed by the same paths the desktop shell used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Products,
    EditProduct(ProductId),
    AddProduct,
}

impl Route {
    /// Catalog screens require a signed-in session.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "/"),
            Route::Products => write!(f, "/products"),
            Route::EditProduct(id) => write!(f, "/editproduct/{}", id),
            Route::AddProduct => write!(f, "/addproduct"),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim();
        match path {
            "" | "/" => return Ok(Route::Login),
            "/products" => return Ok(Route::Products),
            "/addproduct" => return Ok(Route::AddProduct),
            _ => {}
        }

        match path.strip_prefix("/editproduct/") {
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Ok(Route::EditProduct(ProductId::new(id)))
            }
            _ => Err(format!("Ruta desconocida: {}", path)),
        }
    }
}
