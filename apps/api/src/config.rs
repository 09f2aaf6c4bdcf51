use anyhow::{Context, Result};

const DEFAULT_PDF_BASE_URL: &str = "https://api.pdf.co";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub pdf_api_key: String,
    pub pdf_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            pdf_api_key: require_env("PDFCO_API_KEY")?,
            pdf_base_url: std::env::var("PDFCO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PDF_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so parallel tests never race
    // on shared process environment.

    #[test]
    fn test_require_env_present() {
        std::env::set_var("VITAE_TEST_PRESENT", "value");
        assert_eq!(require_env("VITAE_TEST_PRESENT").unwrap(), "value");
    }

    #[test]
    fn test_require_env_missing() {
        let err = require_env("VITAE_TEST_DEFINITELY_MISSING").unwrap_err();
        assert!(err.to_string().contains("VITAE_TEST_DEFINITELY_MISSING"));
    }
}
