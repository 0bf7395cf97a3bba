//! Plain-text line extraction from uploaded documents.
//!
//! Each supported format has a primary and a fallback reader.
//! A document is unreadable only if both fail.

use std::fmt::{self, Display, Formatter};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;
use tracing::warn;

mod docx;
mod pdf;

#[cfg(test)]
pub(crate) use docx::test as docx_test_support;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Detects the format from the file extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?;

        if extension.eq_ignore_ascii_case("docx") {
            Some(Self::Docx)
        } else if extension.eq_ignore_ascii_case("pdf") {
            Some(Self::Pdf)
        } else {
            None
        }
    }
}

impl Display for DocumentFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Pdf => write!(f, "pdf"),
        }
    }
}



/// Every extraction method for the format failed.
#[derive(Debug, Error)]
#[error("no extraction method could read the {} document", .format)]
pub struct UnreadableDocumentError {
    pub format: DocumentFormat,

    /// One message per attempted method, in the order they were tried.
    pub failures: Vec<String>,
}


/// Runs one extraction method, turning a panic inside it into an error message.
pub(crate) fn run_extractor<F>(method_name: &str, extractor: F) -> Result<Vec<String>, String>
where
    F: FnOnce() -> Result<Vec<String>, String>,
{
    let result = panic::catch_unwind(AssertUnwindSafe(extractor)).unwrap_or_else(|payload| {
        let panic_message = payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());

        Err(format!("panicked: {}", panic_message))
    });

    result.map_err(|failure| format!("{}: {}", method_name, failure))
}


/// Extracts text lines from a `.docx` or `.pdf` document.
///
/// Files with any other extension yield no lines. A method that would
/// produce more than `maximum_text_size_bytes` of text fails instead.
pub fn extract_document_lines(
    document_bytes: &[u8],
    file_name: &str,
    maximum_text_size_bytes: usize,
) -> Result<Vec<String>, UnreadableDocumentError> {
    let Some(format) = DocumentFormat::from_file_name(file_name) else {
        return Ok(Vec::new());
    };

    let result = match format {
        DocumentFormat::Docx => docx::extract_lines(document_bytes, maximum_text_size_bytes),
        DocumentFormat::Pdf => pdf::extract_lines(document_bytes, maximum_text_size_bytes),
    };

    result.map_err(|failures| {
        warn!(
            file_name = file_name,
            format = %format,
            failures = ?failures,
            "Unable to extract text from document."
        );

        UnreadableDocumentError { format, failures }
    })
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_format_case_insensitively() {
        assert_eq!(
            DocumentFormat::from_file_name("lesson.DOCX"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::from_file_name("lesson.Pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(DocumentFormat::from_file_name("lesson.txt"), None);
        assert_eq!(DocumentFormat::from_file_name("docx"), None);
    }

    #[test]
    fn unsupported_extension_yields_no_lines() {
        assert!(extract_document_lines(b"VOCABULARY\nWORD: cat", "lesson.txt", 1024)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn panicking_extractor_becomes_failure() {
        let result = run_extractor("exploding", || panic!("kaboom"));

        assert_eq!(result, Err("exploding: panicked: kaboom".to_string()));
    }

    #[test]
    fn garbage_pdf_is_unreadable() {
        let result = extract_document_lines(b"definitely not a pdf", "lesson.pdf", 1024);

        let Err(error) = result else {
            panic!("expected garbage to be unreadable");
        };

        assert_eq!(error.format, DocumentFormat::Pdf);
        assert_eq!(error.failures.len(), 2);
    }
}
