pub mod add_product;
pub mod edit_product;
pub mod login;
pub mod products;
