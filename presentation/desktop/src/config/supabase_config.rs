use std::env;
use std::time::Duration;

use anyhow::{Context, bail};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the Supabase project backing the catalog.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl SupabaseConfig {
    /// Load Supabase configuration from environment variables
    ///
    /// Environment variables:
    /// - SUPABASE_URL: project URL (required)
    /// - SUPABASE_ANON_KEY: public anon key (required)
    /// - SUPABASE_TIMEOUT_SECS: per-request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = required(&lookup, "SUPABASE_URL")?;
        let anon_key = required(&lookup, "SUPABASE_ANON_KEY")?;

        let timeout_secs = match lookup("SUPABASE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SUPABASE_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            url,
            anon_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<String> {
    match lookup(name).map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => bail!("{name} environment variable must be set"),
    }
}
