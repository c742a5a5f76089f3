//! Resume text extraction for uploaded files.
//!
//! PDF goes through `pdf-extract`, plain text is read as-is, and the office
//! formats the upload form accepts get a fixed placeholder until they have a parser.

use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

pub const UNSUPPORTED_FORMAT_PLACEHOLDER: &str = "[Resume parsing for this file format is not yet supported. Please upload PDF or TXT resumes for demo.]";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to stage uploaded file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
    /// .doc, .docx, .rtf, .odt: accepted but not parsed.
    Unsupported,
    Unknown,
}

impl ResumeFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Self {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("pdf") => ResumeFormat::Pdf,
            Some("txt") => ResumeFormat::PlainText,
            Some("doc" | "docx" | "rtf" | "odt") => ResumeFormat::Unsupported,
            _ => ResumeFormat::Unknown,
        }
    }
}

/// A file received on the `resume` multipart field.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Extracts plain text from an upload.
///
/// Parsed formats are staged to a temp file, read back, extracted, and the
/// temp file is deleted before returning, whether extraction succeeded or not.
/// Unknown extensions yield an empty string.
pub async fn extract_text(upload: UploadedResume) -> Result<String, ExtractionError> {
    let format = ResumeFormat::from_file_name(&upload.file_name);
    debug!(
        "Extracting resume '{}' ({} bytes) as {:?}",
        upload.file_name,
        upload.bytes.len(),
        format
    );

    match format {
        ResumeFormat::Unsupported => Ok(UNSUPPORTED_FORMAT_PLACEHOLDER.to_string()),
        ResumeFormat::Unknown => Ok(String::new()),
        ResumeFormat::Pdf | ResumeFormat::PlainText => {
            tokio::task::spawn_blocking(move || extract_staged(format, &upload.bytes)).await?
        }
    }
}

fn extract_staged(format: ResumeFormat, data: &[u8]) -> Result<String, ExtractionError> {
    let mut staged = tempfile::NamedTempFile::new()?;
    staged.write_all(data)?;
    staged.flush()?;

    let extracted = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text(staged.path())
            .map_err(|e| ExtractionError::Pdf(e.to_string())),
        _ => read_plain_text(staged.as_file_mut()),
    };

    staged.close()?;
    extracted
}

fn read_plain_text(file: &mut std::fs::File) -> Result<String, ExtractionError> {
    file.seek(SeekFrom::Start(0))?;
    let mut raw = Vec::new();
    file.read_to_end(&mut raw)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, content: &[u8]) -> UploadedResume {
        UploadedResume {
            file_name: name.to_string(),
            bytes: Bytes::copy_from_slice(content),
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ResumeFormat::from_file_name("cv.pdf"), ResumeFormat::Pdf);
        assert_eq!(ResumeFormat::from_file_name("CV.PDF"), ResumeFormat::Pdf);
        assert_eq!(ResumeFormat::from_file_name("cv.txt"), ResumeFormat::PlainText);
        for name in ["a.doc", "a.docx", "a.rtf", "a.odt", "a.DocX"] {
            assert_eq!(ResumeFormat::from_file_name(name), ResumeFormat::Unsupported);
        }
        assert_eq!(ResumeFormat::from_file_name("cv.png"), ResumeFormat::Unknown);
        assert_eq!(ResumeFormat::from_file_name("resume"), ResumeFormat::Unknown);
    }

    #[tokio::test]
    async fn test_txt_is_returned_verbatim() {
        let content = "Jane Doe\n  Senior Engineer — Zürich\n\n- Shipped 3 products\n";
        let text = extract_text(upload("resume.txt", content.as_bytes()))
            .await
            .unwrap();
        assert_eq!(text, content);
    }

    #[tokio::test]
    async fn test_txt_with_invalid_utf8_is_replaced_not_rejected() {
        let text = extract_text(upload("resume.txt", b"Jane \xff\xfe Doe"))
            .await
            .unwrap();
        assert_eq!(text, "Jane \u{FFFD}\u{FFFD} Doe");
    }

    #[tokio::test]
    async fn test_docx_yields_placeholder_regardless_of_content() {
        let text = extract_text(upload("resume.docx", b"PK\x03\x04 real docx bytes"))
            .await
            .unwrap();
        assert_eq!(text, UNSUPPORTED_FORMAT_PLACEHOLDER);

        let empty = extract_text(upload("resume.docx", b"")).await.unwrap();
        assert_eq!(empty, UNSUPPORTED_FORMAT_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_unknown_extension_yields_empty_text() {
        let text = extract_text(upload("photo.jpg", b"\xff\xd8\xff")).await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_an_error() {
        let result = extract_text(upload("resume.pdf", b"this is not a pdf")).await;
        assert!(result.is_err());
    }
}
