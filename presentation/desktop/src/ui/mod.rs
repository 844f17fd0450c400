pub mod app;
pub mod forms;
pub mod messages;
pub mod routes;
pub mod table;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
