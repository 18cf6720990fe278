use std::net::SocketAddr;

use crate::JobVariant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// A third-party integration whose credentials were resolved at startup.
///
/// Call sites match on this value instead of re-reading the environment.
#[derive(Clone, PartialEq, Eq)]
pub enum Integration {
    Configured(String),
    Unconfigured,
}

impl Integration {
    /// Blank or whitespace-only values count as unconfigured.
    #[must_use]
    pub fn from_optional(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Integration::Configured(v),
            _ => Integration::Unconfigured,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Integration::Configured(_))
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Integration::Configured(_) => "configured",
            Integration::Unconfigured => "unconfigured",
        }
    }
}

impl std::fmt::Debug for Integration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Integration::Configured(_) => f.debug_tuple("Configured").field(&"[redacted]").finish(),
            Integration::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub scrape_variant: JobVariant,
    pub scrape_product_count: u32,
    pub scrape_preview_len: usize,
    /// Authentication provider (`CLERK_SECRET_KEY`).
    pub auth: Integration,
    /// Payment provider (`STRIPE_SECRET_KEY`).
    pub payments: Integration,
    /// Catalog database (`DATABASE_URL`).
    pub database: Integration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_secret_is_unconfigured() {
        assert_eq!(Integration::from_optional(None), Integration::Unconfigured);
        assert_eq!(
            Integration::from_optional(Some("   ".to_string())),
            Integration::Unconfigured
        );
        assert!(Integration::from_optional(Some("sk_test_123".to_string())).is_configured());
    }

    #[test]
    fn debug_redacts_secret() {
        let integration = Integration::Configured("sk_live_secret".to_string());
        let rendered = format!("{integration:?}");
        assert!(!rendered.contains("sk_live_secret"));
        assert!(rendered.contains("[redacted]"));
        assert_eq!(integration.status(), "configured");
    }
}
