pub mod auth;
pub mod client;
pub mod error;
pub mod query;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}

#[cfg(test)]
mod test_server;
