//! Document Ingestor — converts an uploaded PDF binary into plain text.

use crate::errors::AppError;

/// Extracts the text content of a PDF, with per-page text concatenated by the
/// extractor and leading/trailing whitespace trimmed from the final value.
///
/// A stream the parser cannot open fails with `AppError::DocumentRead`. A PDF
/// that parses but yields no text (a scanned image with no text layer) returns
/// an empty string, NOT an error — the caller decides what empty text means.
/// These are two distinct outcomes and must stay distinct.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)?;
    Ok(text.trim().to_string())
}


#[cfg(test)]
mod tests {
    use super::testdata::{empty_page_pdf, pdf_with_text};
    use super::*;

    #[test]
    fn corrupt_bytes_fail_with_document_read_error() {
        let result = extract_text(b"this is not a pdf at all");
        assert!(matches!(result, Err(AppError::DocumentRead(_))));
    }

    #[test]
    fn pdf_without_text_layer_yields_empty_string() {
        let text = extract_text(&empty_page_pdf()).expect("valid PDF must not error");
        assert_eq!(text, "");
    }

    #[test]
    fn pdf_with_text_is_extracted_and_trimmed() {
        let pdf = pdf_with_text("Senior Rust Engineer");
        let text = extract_text(&pdf).expect("extraction");
        assert!(
            text.contains("Senior Rust Engineer"),
            "extracted text was: {text:?}"
        );
        assert_eq!(text, text.trim());
    }
}
