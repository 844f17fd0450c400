pub mod app_config;
pub mod supabase_config;
