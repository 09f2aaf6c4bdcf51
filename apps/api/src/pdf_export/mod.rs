//! PDF export adapter.
//!
//! The document-rendering backend is a two-call contract: submit the HTML
//! and get back a result locator, then fetch the binary from the locator.
//! Both calls can fail; neither failure is fatal to the wizard and no
//! retry is attempted, so the user re-invokes export manually.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::models::resume::StyleConfig;

/// File name offered for download.
pub const PDF_FILE_NAME: &str = "resume.pdf";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("submission rejected (status {status}): {message}")]
    SubmitRejected { status: u16, message: String },

    #[error("result locator missing from conversion response")]
    MissingLocator,

    #[error("binary fetch failed (status {status})")]
    FetchFailed { status: u16 },
}

/// Outcome of a successful submission. The locator may still be absent;
/// that is a reported error and the binary fetch must not be attempted.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub locator: Option<String>,
}

/// The document-rendering backend contract.
#[async_trait]
pub trait PdfBackend: Send + Sync {
    async fn submit(&self, html: &str, name: &str) -> Result<SubmitOutcome, PdfError>;
    async fn fetch(&self, locator: &str) -> Result<Bytes, PdfError>;
}

#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    html: &'a str,
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    url: Option<String>,
}

/// HTML-to-PDF conversion service client (PDF.co-style API).
#[derive(Clone)]
pub struct HttpPdfBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpPdfBackend {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl PdfBackend for HttpPdfBackend {
    async fn submit(&self, html: &str, name: &str) -> Result<SubmitOutcome, PdfError> {
        let url = format!("{}/v1/pdf/convert/from/html", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&ConvertRequest { html, name })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("PDF conversion rejected ({status}): {message}");
            return Err(PdfError::SubmitRejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ConvertResponse = response.json().await?;
        Ok(SubmitOutcome {
            locator: parsed.url,
        })
    }

    async fn fetch(&self, locator: &str) -> Result<Bytes, PdfError> {
        let response = self.client.get(locator).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("PDF download failed ({status}) from {locator}");
            return Err(PdfError::FetchFailed {
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?)
    }
}

/// Wraps the assembled fragment and drives the submit-then-fetch sequence.
#[derive(Clone)]
pub struct PdfExporter {
    backend: Arc<dyn PdfBackend>,
}

impl PdfExporter {
    pub fn new(backend: Arc<dyn PdfBackend>) -> Self {
        Self { backend }
    }

    /// Converts an assembled resume fragment to PDF bytes.
    ///
    /// A missing locator errors out before any binary fetch. Errors leave
    /// the caller's state untouched; there is no partial result.
    pub async fn export(&self, fragment: &str, style: &StyleConfig) -> Result<Bytes, PdfError> {
        let document = wrap_document(fragment, style);
        let outcome = self.backend.submit(&document, PDF_FILE_NAME).await?;
        let locator = outcome.locator.ok_or(PdfError::MissingLocator)?;
        debug!("PDF conversion accepted, fetching {locator}");
        self.backend.fetch(&locator).await
    }
}

/// Full-document wrapper for the conversion backend: page margins zeroed,
/// styling re-applied at the body level so it survives even if the inner
/// fragment omits it.
pub fn wrap_document(fragment: &str, style: &StyleConfig) -> String {
    format!(
        "<html>\n<head>\n<style>\n\
         @page {{\n    margin: 0;\n}}\n\
         body {{\n    margin: 0;\n    padding: 0;\n    font-family: {font};\n    \
         color: {text};\n    background-color: {theme};\n}}\n\
         </style>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n",
        font = style.font_family.css_name(),
        text = style.text_color,
        theme = style.theme_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockBackend {
        locator: Option<String>,
        submit_error: Option<u16>,
        fetch_error: Option<u16>,
        fetch_calls: AtomicUsize,
    }

    impl MockBackend {
        fn ok() -> Self {
            MockBackend {
                locator: Some("https://cdn.example/resume.pdf".into()),
                submit_error: None,
                fetch_error: None,
                fetch_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PdfBackend for MockBackend {
        async fn submit(&self, _html: &str, _name: &str) -> Result<SubmitOutcome, PdfError> {
            if let Some(status) = self.submit_error {
                return Err(PdfError::SubmitRejected {
                    status,
                    message: "rejected".into(),
                });
            }
            Ok(SubmitOutcome {
                locator: self.locator.clone(),
            })
        }

        async fn fetch(&self, _locator: &str) -> Result<Bytes, PdfError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.fetch_error {
                return Err(PdfError::FetchFailed { status });
            }
            Ok(Bytes::from_static(b"%PDF-1.7 fake"))
        }
    }

    fn style() -> StyleConfig {
        StyleConfig::default()
    }

    #[tokio::test]
    async fn test_export_happy_path() {
        let backend = Arc::new(MockBackend::ok());
        let exporter = PdfExporter::new(backend.clone());
        let bytes = exporter.export("<div>resume</div>", &style()).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_locator_skips_fetch() {
        let backend = Arc::new(MockBackend {
            locator: None,
            ..MockBackend::ok()
        });
        let exporter = PdfExporter::new(backend.clone());
        let err = exporter.export("<div/>", &style()).await.unwrap_err();
        assert!(matches!(err, PdfError::MissingLocator));
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_rejection_is_reported() {
        let backend = Arc::new(MockBackend {
            submit_error: Some(402),
            ..MockBackend::ok()
        });
        let exporter = PdfExporter::new(backend.clone());
        let err = exporter.export("<div/>", &style()).await.unwrap_err();
        assert!(matches!(err, PdfError::SubmitRejected { status: 402, .. }));
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_no_bytes() {
        let backend = Arc::new(MockBackend {
            fetch_error: Some(500),
            ..MockBackend::ok()
        });
        let exporter = PdfExporter::new(backend);
        let err = exporter.export("<div/>", &style()).await.unwrap_err();
        assert!(matches!(err, PdfError::FetchFailed { status: 500 }));
    }

    #[test]
    fn test_wrap_document_zeroes_margins_and_restyles_body() {
        let mut s = style();
        s.theme_color = "#112233".parse().unwrap();
        let doc = wrap_document("<div>inner</div>", &s);
        assert!(doc.contains("@page"));
        assert!(doc.contains("margin: 0;"));
        assert!(doc.contains("background-color: #112233;"));
        assert!(doc.contains("font-family: Helvetica;"));
        assert!(doc.contains("<div>inner</div>"));
        assert!(doc.starts_with("<html>"));
    }
}
