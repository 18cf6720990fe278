use crate::app_config::{AppConfig, Environment, Integration};
use crate::{ConfigError, JobVariant};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("MIDO_ENV", "development"))?;

    let bind_addr = or_default("MIDO_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("MIDO_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("MIDO_LOG_LEVEL", "info");

    let scrape_variant = or_default("MIDO_SCRAPE_VARIANT", "mock")
        .parse::<JobVariant>()
        .map_err(|e| invalid("MIDO_SCRAPE_VARIANT", e.to_string()))?;

    let scrape_product_count = or_default("MIDO_SCRAPE_PRODUCT_COUNT", "20")
        .parse::<u32>()
        .map_err(|e| invalid("MIDO_SCRAPE_PRODUCT_COUNT", e.to_string()))?;
    if scrape_product_count == 0 {
        return Err(invalid(
            "MIDO_SCRAPE_PRODUCT_COUNT",
            "must be at least 1".to_string(),
        ));
    }

    let scrape_preview_len = or_default("MIDO_SCRAPE_PREVIEW_LEN", "5")
        .parse::<usize>()
        .map_err(|e| invalid("MIDO_SCRAPE_PREVIEW_LEN", e.to_string()))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        scrape_variant,
        scrape_product_count,
        scrape_preview_len,
        auth: Integration::from_optional(lookup("CLERK_SECRET_KEY").ok()),
        payments: Integration::from_optional(lookup("STRIPE_SECRET_KEY").ok()),
        database: Integration::from_optional(lookup("DATABASE_URL").ok()),
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MIDO_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
