//! Export entry points
//!
//! The full pipeline in one call: build the document template, rasterize it,
//! split the bitmap into pages, and assemble the PDF. A blocking variant
//! returns the bytes directly; the async variant runs the pipeline on a
//! blocking thread under a deadline so a stuck export cannot hold a request
//! handler forever.

use crate::filename::export_file_name;
use crate::paginator::paginate;
use crate::pdf::{write_image_document, DocumentInfo};
use crate::{ExportError, Result};
use chrono::Utc;
use doc_template::{build_document, BRAND_NAME};
use form_model::{Listing, Response};
use rasterizer::{rasterize, RasterConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound on a single export run
pub const EXPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Export pipeline options
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Rasterization parameters
    pub raster: RasterConfig,
    /// Document title override; defaults to the category label
    pub title: Option<String>,
    /// Document author override; defaults to the brand name
    pub author: Option<String>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_raster(mut self, raster: RasterConfig) -> Self {
        self.raster = raster;
        self
    }
}

/// A finished export: filename plus PDF bytes
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

fn document_info(response: &Response, options: &ExportOptions) -> DocumentInfo {
    DocumentInfo {
        title: Some(
            options
                .title
                .clone()
                .unwrap_or_else(|| response.category.display_label().to_string()),
        ),
        author: Some(options.author.clone().unwrap_or_else(|| BRAND_NAME.to_string())),
        creator: Some("Lead Desk".to_string()),
        producer: Some("Lead Desk PDF Export".to_string()),
        subject: None,
        creation_date: Some(Utc::now()),
    }
}

/// Run the full export pipeline and return the PDF bytes.
pub fn export_response_bytes(
    response: &Response,
    listing: Option<&Listing>,
    options: &ExportOptions,
) -> Result<ExportedFile> {
    let doc = build_document(response, listing);
    let bitmap = rasterize(&doc, &options.raster)?;
    let pages = paginate(&bitmap)?;
    let bytes = write_image_document(&pages, &document_info(response, options))?;

    let file_name = export_file_name(
        response.respondent_name(),
        listing.map(|l| l.location.as_str()),
        response.submitted_at,
    );

    info!(
        response = %response.id,
        pages = pages.len(),
        bytes = bytes.len(),
        %file_name,
        "response exported"
    );
    Ok(ExportedFile { file_name, bytes })
}

/// Export a response and write the PDF into a directory.
///
/// The file is assembled fully in memory first; a failing export never
/// leaves a partial file behind.
pub fn export_response_to_dir(
    response: &Response,
    listing: Option<&Listing>,
    dir: &Path,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let exported = export_response_bytes(response, listing, options)?;
    let path = dir.join(&exported.file_name);
    std::fs::write(&path, &exported.bytes)?;
    Ok(path)
}

/// Export a response on a blocking thread with a deadline.
pub async fn export_response(
    response: Response,
    listing: Option<Listing>,
    options: ExportOptions,
) -> Result<ExportedFile> {
    let task = tokio::task::spawn_blocking(move || {
        export_response_bytes(&response, listing.as_ref(), &options)
    });

    match tokio::time::timeout(EXPORT_TIMEOUT, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => {
            warn!(error = %join_err, "export task failed");
            Err(ExportError::Task(join_err.to_string()))
        }
        Err(_) => {
            warn!(timeout = ?EXPORT_TIMEOUT, "export timed out");
            Err(ExportError::Timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_model::{AnswerMap, Category};
    use serde_json::json;

    fn sample_response() -> Response {
        let mut answers = AnswerMap::new();
        answers.insert("name".to_string(), json!("Kovács Anna"));
        answers.insert("overall-impression".to_string(), json!("yes"));
        answers.insert("price-opinion".to_string(), json!("túl magas"));
        Response::new(Category::ViewingFeedback, None, answers)
    }

    fn sample_listing() -> Listing {
        Listing::new("Budapest XIII kerület", 45_000_000, "https://example.com/l/1", "rita")
    }

    #[test]
    fn test_export_bytes_is_a_pdf() {
        let exported =
            export_response_bytes(&sample_response(), None, &ExportOptions::new()).unwrap();
        assert!(exported.bytes.starts_with(b"%PDF-"));
        assert!(exported.bytes.ends_with(b"%%EOF\n"));
        assert!(exported.file_name.ends_with(".pdf"));
    }

    #[test]
    fn test_file_name_uses_respondent_and_listing() {
        let listing = sample_listing();
        let exported =
            export_response_bytes(&sample_response(), Some(&listing), &ExportOptions::new())
                .unwrap();
        assert!(exported.file_name.starts_with("Kovács_Anna_"));
        assert!(exported.file_name.contains("Budapest_XIII_kerület"));
    }

    #[test]
    fn test_export_to_dir_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_response_to_dir(
            &sample_response(),
            None,
            dir.path(),
            &ExportOptions::new(),
        )
        .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_title_override_lands_in_metadata() {
        let options = ExportOptions::new().with_title("Riport").with_author("Teszt");
        let exported = export_response_bytes(&sample_response(), None, &options).unwrap();
        let text = String::from_utf8_lossy(&exported.bytes);
        assert!(text.contains("(Riport)"));
        assert!(text.contains("(Teszt)"));
    }

    #[tokio::test]
    async fn test_async_export_completes() {
        let exported = export_response(sample_response(), None, ExportOptions::new())
            .await
            .unwrap();
        assert!(exported.bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_async_export_with_listing() {
        let listing = sample_listing();
        let exported =
            export_response(sample_response(), Some(listing), ExportOptions::new())
                .await
                .unwrap();
        assert!(exported.file_name.contains("Budapest"));
    }
}
