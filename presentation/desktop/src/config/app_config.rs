use super::supabase_config::SupabaseConfig;

pub struct AppConfig {
    pub supabase: SupabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            supabase: SupabaseConfig::from_env()?,
        })
    }
}
