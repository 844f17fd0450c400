//! Spanish display text for every error the catalog can surface.

use business::domain::category::errors::CategoryError;
use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::filter::FilterError;
use business::domain::session::errors::SessionError;

/// What the user was doing when the error happened. Picks the fallback text
/// shown when the backend gave no message of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    CheckSession,
    LoadProducts,
    LoadCategories,
    FetchProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl Operation {
    pub fn fallback(self) -> &'static str {
        match self {
            Operation::Login => "Error al iniciar sesión. Por favor intente nuevamente.",
            Operation::CheckSession => "Ocurrió un error desconocido",
            Operation::LoadProducts => "Error desconocido al cargar productos",
            Operation::LoadCategories => "Error al cargar categorías",
            Operation::FetchProduct => "Error al obtener el producto",
            Operation::CreateProduct => "Error desconocido al crear el producto",
            Operation::UpdateProduct => "Error al actualizar el producto",
            Operation::DeleteProduct => "Error desconocido al eliminar producto",
        }
    }
}

pub trait IntoErrorMessage {
    fn into_error_message(self, operation: Operation) -> String;
}

impl IntoErrorMessage for RepositoryError {
    fn into_error_message(self, operation: Operation) -> String {
        match self {
            RepositoryError::NotFound => "Producto no encontrado".to_string(),
            RepositoryError::Backend(message) => message,
            RepositoryError::Unavailable => operation.fallback().to_string(),
        }
    }
}

impl IntoErrorMessage for ProductError {
    fn into_error_message(self, operation: Operation) -> String {
        match self {
            ProductError::MissingFields => "Por favor, completa todos los campos.".to_string(),
            ProductError::IdEmpty => "El ID no puede estar vacío.".to_string(),
            ProductError::InvalidPrice => "El precio debe ser un número válido.".to_string(),
            ProductError::InvalidCategory => "Selecciona una categoría válida.".to_string(),
            ProductError::NotFound => "Producto no encontrado".to_string(),
            ProductError::Repository(e) => e.into_error_message(operation),
        }
    }
}

impl IntoErrorMessage for CategoryError {
    fn into_error_message(self, _operation: Operation) -> String {
        Operation::LoadCategories.fallback().to_string()
    }
}

impl IntoErrorMessage for SessionError {
    fn into_error_message(self, operation: Operation) -> String {
        match self {
            SessionError::MissingCredentials => "Por favor ingrese email y contraseña".to_string(),
            SessionError::InvalidCredentials => "Credenciales inválidas".to_string(),
            SessionError::NoActiveSession => "No hay sesión activa".to_string(),
            SessionError::Backend(message) if operation == Operation::CheckSession => message,
            SessionError::Backend(_) | SessionError::Unavailable => {
                operation.fallback().to_string()
            }
        }
    }
}

impl IntoErrorMessage for FilterError {
    fn into_error_message(self, _operation: Operation) -> String {
        let message = match self {
            FilterError::InvalidCategory => "Selecciona una categoría válida.",
            FilterError::InvalidPriceMin => "El precio mínimo debe ser un número válido.",
            FilterError::InvalidPriceMax => "El precio máximo debe ser un número válido.",
            FilterError::InvalidSortField => "Ordenar por: use name o price.",
            FilterError::InvalidSortOrder => "Orden: use asc o desc.",
        };
        message.to_string()
    }
}
