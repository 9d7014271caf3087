//! PDF text extraction.
//!
//! Pages are read in document order and joined with newlines. A document
//! without a text layer (scanned or image-only) yields an empty string, which
//! is a valid outcome the caller has to check for.

use std::fs::File;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

/// Extracts the full text of the PDF at `path`.
///
/// Blocking; async callers should go through `spawn_blocking`.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, ExtractionError> {
    // Surface missing/unreadable files as I/O errors rather than parser noise.
    // The handle is dropped before parsing starts.
    File::open(path).map_err(|source| ExtractionError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let pages = pdf_extract::extract_text_by_pages(path)?;
    debug!("Extracted {} page(s) from {}", pages.len(), path.display());

    Ok(join_pages(&pages))
}

/// Appends a newline after every page, then trims the whole document.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text.trim().to_string()
}


#[cfg(test)]
mod tests {
    use super::test_pdf::write_pdf;
    use super::*;

    #[test]
    fn test_join_pages_trims_and_separates() {
        let pages = vec!["  first page".to_string(), "second page  \n".to_string()];
        assert_eq!(join_pages(&pages), "first page\nsecond page");
    }

    #[test]
    fn test_join_pages_empty_document() {
        assert_eq!(join_pages(&[]), "");
        assert_eq!(join_pages(&["  ".to_string(), "\n\n".to_string()]), "");
    }

    #[test]
    fn test_extracts_text_in_page_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        write_pdf(&path, &[Some("Jane Doe"), Some("Skills: Rust")]);

        let text = extract_text_from_pdf(&path).unwrap();
        assert!(!text.is_empty());
        assert_eq!(text, text.trim());
        let name = text.find("Jane Doe").expect("first page text missing");
        let skills = text.find("Skills: Rust").expect("second page text missing");
        assert!(name < skills);
    }

    #[test]
    fn test_blank_pages_yield_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        write_pdf(&path, &[None, None]);

        let text = extract_text_from_pdf(&path).unwrap();
        assert!(text.is_empty(), "expected empty text, got {text:?}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_text_from_pdf(&dir.path().join("nope.pdf")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
        assert!(err.to_string().contains("nope.pdf"));
    }

    #[test]
    fn test_garbage_file_is_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();

        let err = extract_text_from_pdf(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
