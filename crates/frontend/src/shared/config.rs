//! Runtime configuration of the dashboard.
//!
//! The backend address comes from the `SELLER_API_BASE` variable at compile
//! time when it is set; otherwise it is derived from the page location with
//! the backend listening on port 3000.

use once_cell::sync::Lazy;

pub const BACKEND_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed API base URL; `None` means "derive from window.location".
    pub api_base_override: Option<&'static str>,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Available quantity at or below which a product counts as low stock.
    pub low_stock_threshold: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_override: option_env!("SELLER_API_BASE").filter(|s| !s.trim().is_empty()),
            default_page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
            low_stock_threshold: 5,
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::default);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Builds the backend base URL from a page location.
pub fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            base_from_location("https:", "seller.example.com"),
            "https://seller.example.com:3000"
        );
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert!(cfg.page_size_options.contains(&cfg.default_page_size));
        assert_eq!(cfg.low_stock_threshold, 5);
    }
}
